//! Scripted shopping flow against the real store files.

use anyhow::Result;
use duet_application::{build_shopping_assistant, shopping_toolset};
use duet_core::config::AppConfig;
use serde_json::json;

pub async fn run(config: &AppConfig) -> Result<()> {
    let tools = shopping_toolset(build_shopping_assistant(config)?);

    println!("=== Search: black hoodies under 1500 ===");
    let listing = tools
        .dispatch(
            "list_products",
            json!({"filters": {"category": "hoodie", "color": "black", "max_price": 1500}}),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&listing)?);

    let Some(first) = listing["products"].as_array().and_then(|p| p.first()) else {
        println!("No products found");
        return Ok(());
    };
    let product_id = first["id"].as_str().unwrap_or_default().to_string();

    println!("\n=== Adding {} to the cart ===", product_id);
    let cart = tools
        .dispatch("add_to_cart", json!({"product_id": &product_id, "quantity": 1}))
        .await?;
    println!("{}", serde_json::to_string_pretty(&cart)?);

    println!("\n=== Checkout ===");
    let checkout = tools.dispatch("checkout", json!({})).await?;
    println!("{}", serde_json::to_string_pretty(&checkout)?);
    let order_id = checkout["order"]["id"].as_str().unwrap_or_default().to_string();

    println!("\n=== Last order now ===");
    let last = tools.dispatch("view_last_order", json!({})).await?;
    println!("{}", serde_json::to_string_pretty(&last)?);

    println!("\n=== Removing the item from the order ===");
    let updated = tools
        .dispatch(
            "remove_item",
            json!({"order_id": &order_id, "product_id": &product_id}),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&updated)?);

    Ok(())
}
