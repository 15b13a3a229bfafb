//! The voice shopping assistant.
//!
//! Owns the session cart and fronts the merchant service. Every public
//! method mirrors one tool the conversational layer can invoke; replies are
//! JSON values relayed back into the conversation. Not-found conditions are
//! `{"ok": false, ...}` replies, never errors; only I/O faults propagate.

use crate::merchant::MerchantService;
use duet_core::cart::Cart;
use duet_core::catalog::ProductFilter;
use duet_core::error::Result;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;

/// System prompt for the voice framework driving this agent.
pub const INSTRUCTIONS: &str = "\
You are a voice shopping assistant. Use tools to list, add/remove, and checkout.
When the user asks to browse, call list_products with an optional filters object.
When the user confirms purchase, call add_to_cart then checkout.
Always use prices from the merchant layer (INR).
Keep replies concise.";

/// How many products a single listing reply may carry.
const LISTING_LIMIT: usize = 5;

pub struct ShoppingAssistant {
    merchant: Arc<MerchantService>,
    cart: Mutex<Cart>,
}

impl ShoppingAssistant {
    pub fn new(merchant: Arc<MerchantService>) -> Self {
        Self {
            merchant,
            cart: Mutex::new(Cart::new()),
        }
    }

    pub fn merchant(&self) -> &MerchantService {
        &self.merchant
    }

    /// Lists catalog products matching the given loose-JSON filters.
    ///
    /// Invalid filters are reported as a structured reply so the caller can
    /// distinguish a bad query from an empty result. At most the first five
    /// matches are returned, summarized for speech.
    pub fn list_products(&self, filters: &Value) -> Value {
        let filter = match ProductFilter::from_value(filters) {
            Ok(filter) => filter,
            Err(e) => {
                return json!({"ok": false, "message": format!("Invalid filters: {}", e)});
            }
        };

        let products = self.merchant.list_products(&filter);
        if products.is_empty() {
            return json!({"products": [], "message": "No products found."});
        }

        let summarized: Vec<Value> = products
            .iter()
            .take(LISTING_LIMIT)
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "price": p.price,
                    "currency": p.currency,
                    "color": p.color,
                })
            })
            .collect();
        json!({"products": summarized})
    }

    /// Adds a catalog product to the session cart.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Value {
        let Some(product) = self.merchant.catalog().find(product_id) else {
            return json!({"ok": false, "message": "Product not found."});
        };

        let mut cart = self.cart.lock().await;
        cart.add(product, quantity.max(1));
        json!({
            "ok": true,
            "cart": cart.items(),
            "total": cart.total(),
            "currency": product.currency,
        })
    }

    /// Removes all lines for a product from the session cart.
    pub async fn remove_from_cart(&self, product_id: &str) -> Value {
        let mut cart = self.cart.lock().await;
        if cart.remove(product_id) == 0 {
            return json!({"ok": false, "message": "Product not in cart."});
        }
        json!({"ok": true, "cart": cart.items(), "total": cart.total()})
    }

    /// Turns the cart into a persisted order and clears it.
    pub async fn checkout(&self) -> Result<Value> {
        let mut cart = self.cart.lock().await;
        if cart.is_empty() {
            return Ok(json!({"ok": false, "message": "Cart empty."}));
        }

        let order = self.merchant.create_order(&cart.to_requests()).await?;
        cart.clear();
        Ok(json!({"ok": true, "order": order}))
    }

    /// The most recent order in the store.
    pub async fn view_last_order(&self) -> Result<Value> {
        match self.merchant.last_order().await? {
            Some(order) => Ok(json!({"ok": true, "order": order})),
            None => Ok(json!({"ok": false, "message": "No previous orders."})),
        }
    }

    /// Removes a product's lines from a persisted order.
    pub async fn remove_item(&self, order_id: &str, product_id: &str) -> Result<Value> {
        match self
            .merchant
            .remove_item_from_order(order_id, product_id)
            .await?
        {
            Some(order) => Ok(json!({"ok": true, "order": order})),
            None => Ok(json!({"ok": false, "message": "Order or product not found."})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::catalog::{Catalog, Product};
    use duet_infrastructure::JsonOrderRepository;
    use serde_json::json;
    use tempfile::TempDir;

    fn product(id: &str, category: &str, color: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {}", id),
            category: category.to_string(),
            color: color.to_string(),
            size: "M".to_string(),
            price,
            currency: "INR".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    fn assistant(dir: &TempDir) -> ShoppingAssistant {
        let catalog = Catalog::new(vec![
            product("h1", "hoodie", "black", 1200),
            product("s1", "shirt", "white", 2000),
        ]);
        let repo = Arc::new(JsonOrderRepository::new(dir.path().join("orders.json")));
        ShoppingAssistant::new(Arc::new(MerchantService::new(catalog, repo, "INR")))
    }

    #[tokio::test]
    async fn test_list_products_summarizes_matches() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        let reply = agent.list_products(&json!({"category": "hoodie", "max_price": 1500}));
        let products = reply["products"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["id"], "h1");
    }

    #[tokio::test]
    async fn test_list_products_reports_invalid_filters() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        let reply = agent.list_products(&json!({"max_price": "a lot"}));
        assert_eq!(reply["ok"], false);
        assert!(reply["message"].as_str().unwrap().contains("max_price"));
    }

    #[tokio::test]
    async fn test_list_products_no_matches() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        let reply = agent.list_products(&json!({"category": "sneaker"}));
        assert_eq!(reply["message"], "No products found.");
        assert!(reply["products"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cart_flow_to_checkout() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        let reply = agent.add_to_cart("h1", 2).await;
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["total"], 2400);

        let reply = agent.checkout().await.unwrap();
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["order"]["total"], 2400);

        // Cart was cleared by the successful checkout.
        let reply = agent.checkout().await.unwrap();
        assert_eq!(reply["ok"], false);
        assert_eq!(reply["message"], "Cart empty.");
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);
        let reply = agent.add_to_cart("ghost", 1).await;
        assert_eq!(reply["ok"], false);
        assert_eq!(reply["message"], "Product not found.");
    }

    #[tokio::test]
    async fn test_remove_from_cart_distinguishes_missing() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        agent.add_to_cart("h1", 1).await;
        let reply = agent.remove_from_cart("s1").await;
        assert_eq!(reply["ok"], false);
        assert_eq!(reply["message"], "Product not in cart.");

        let reply = agent.remove_from_cart("h1").await;
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["total"], 0);
    }

    #[tokio::test]
    async fn test_view_last_order_when_empty() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);
        let reply = agent.view_last_order().await.unwrap();
        assert_eq!(reply["ok"], false);
        assert_eq!(reply["message"], "No previous orders.");
    }

    #[tokio::test]
    async fn test_remove_item_from_persisted_order() {
        let dir = TempDir::new().unwrap();
        let agent = assistant(&dir);

        agent.add_to_cart("h1", 1).await;
        agent.add_to_cart("s1", 1).await;
        let checkout = agent.checkout().await.unwrap();
        let order_id = checkout["order"]["id"].as_str().unwrap().to_string();

        let reply = agent.remove_item(&order_id, "h1").await.unwrap();
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["order"]["total"], 2000);

        let reply = agent.remove_item("ORDnope", "h1").await.unwrap();
        assert_eq!(reply["ok"], false);
    }
}
