//! Concrete tools for the two agents.
//!
//! Thin adapters from the JSON tool contract to the agent methods. Argument
//! objects are deserialized into typed structs; a shape mismatch becomes a
//! structured `{"ok": false, ...}` reply so the conversational layer can
//! correct itself and retry.

use crate::improv_host::ImprovHost;
use crate::shopping::ShoppingAssistant;
use crate::tool::{Tool, ToolRegistry};
use async_trait::async_trait;
use duet_core::error::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

fn invalid_args(e: impl std::fmt::Display) -> Value {
    json!({"ok": false, "message": format!("Invalid arguments: {}", e)})
}

// ---------------------------------------------------------------------------
// Shopping assistant tools
// ---------------------------------------------------------------------------

pub struct ListProductsTool {
    agent: Arc<ShoppingAssistant>,
}

#[derive(Deserialize)]
struct ListProductsArgs {
    #[serde(default)]
    filters: Value,
}

#[async_trait]
impl Tool for ListProductsTool {
    fn name(&self) -> &str {
        "list_products"
    }

    fn description(&self) -> &str {
        "List catalog products, optionally filtered by category, color, size and max_price."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "filters": {
                    "type": "object",
                    "properties": {
                        "category": {"type": "string"},
                        "color": {"type": "string"},
                        "size": {"type": "string"},
                        "max_price": {"type": "integer"},
                    },
                },
            },
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<ListProductsArgs>(args) {
            Ok(parsed) => Ok(self.agent.list_products(&parsed.filters)),
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

pub struct AddToCartTool {
    agent: Arc<ShoppingAssistant>,
}

#[derive(Deserialize)]
struct AddToCartArgs {
    product_id: String,
    #[serde(default = "one")]
    quantity: u32,
}

fn one() -> u32 {
    1
}

#[async_trait]
impl Tool for AddToCartTool {
    fn name(&self) -> &str {
        "add_to_cart"
    }

    fn description(&self) -> &str {
        "Add a product to the session cart by id, with an optional quantity."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "product_id": {"type": "string"},
                "quantity": {"type": "integer", "minimum": 1},
            },
            "required": ["product_id"],
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<AddToCartArgs>(args) {
            Ok(parsed) => Ok(self.agent.add_to_cart(&parsed.product_id, parsed.quantity).await),
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

pub struct RemoveFromCartTool {
    agent: Arc<ShoppingAssistant>,
}

#[derive(Deserialize)]
struct ProductIdArgs {
    product_id: String,
}

#[async_trait]
impl Tool for RemoveFromCartTool {
    fn name(&self) -> &str {
        "remove_from_cart"
    }

    fn description(&self) -> &str {
        "Remove a product from the session cart."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {"product_id": {"type": "string"}},
            "required": ["product_id"],
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<ProductIdArgs>(args) {
            Ok(parsed) => Ok(self.agent.remove_from_cart(&parsed.product_id).await),
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

pub struct CheckoutTool {
    agent: Arc<ShoppingAssistant>,
}

#[async_trait]
impl Tool for CheckoutTool {
    fn name(&self) -> &str {
        "checkout"
    }

    fn description(&self) -> &str {
        "Create an order from the session cart and clear the cart."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        self.agent.checkout().await
    }
}

pub struct ViewLastOrderTool {
    agent: Arc<ShoppingAssistant>,
}

#[async_trait]
impl Tool for ViewLastOrderTool {
    fn name(&self) -> &str {
        "view_last_order"
    }

    fn description(&self) -> &str {
        "Show the most recently created order."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        self.agent.view_last_order().await
    }
}

pub struct RemoveItemTool {
    agent: Arc<ShoppingAssistant>,
}

#[derive(Deserialize)]
struct RemoveItemArgs {
    order_id: String,
    product_id: String,
}

#[async_trait]
impl Tool for RemoveItemTool {
    fn name(&self) -> &str {
        "remove_item"
    }

    fn description(&self) -> &str {
        "Remove a product's lines from an existing order."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "order_id": {"type": "string"},
                "product_id": {"type": "string"},
            },
            "required": ["order_id", "product_id"],
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<RemoveItemArgs>(args) {
            Ok(parsed) => {
                self.agent
                    .remove_item(&parsed.order_id, &parsed.product_id)
                    .await
            }
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

/// Tool set for the shopping assistant.
pub fn shopping_toolset(agent: Arc<ShoppingAssistant>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListProductsTool { agent: agent.clone() }));
    registry.register(Arc::new(AddToCartTool { agent: agent.clone() }));
    registry.register(Arc::new(RemoveFromCartTool { agent: agent.clone() }));
    registry.register(Arc::new(CheckoutTool { agent: agent.clone() }));
    registry.register(Arc::new(ViewLastOrderTool { agent: agent.clone() }));
    registry.register(Arc::new(RemoveItemTool { agent }));
    registry
}

// ---------------------------------------------------------------------------
// Improv host tools
// ---------------------------------------------------------------------------

pub struct SetPlayerTool {
    host: Arc<ImprovHost>,
}

#[derive(Deserialize)]
struct SetPlayerArgs {
    #[serde(default)]
    name: String,
}

#[async_trait]
impl Tool for SetPlayerTool {
    fn name(&self) -> &str {
        "set_player"
    }

    fn description(&self) -> &str {
        "Record the player's name for the show."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<SetPlayerArgs>(args) {
            Ok(parsed) => Ok(self.host.set_player(&parsed.name).await),
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

pub struct NextSceneTool {
    host: Arc<ImprovHost>,
}

#[async_trait]
impl Tool for NextSceneTool {
    fn name(&self) -> &str {
        "next_scene"
    }

    fn description(&self) -> &str {
        "Draw the next improv scenario and open a round."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        Ok(self.host.next_scene().await)
    }
}

pub struct CompleteImprovTool {
    host: Arc<ImprovHost>,
}

#[derive(Deserialize)]
struct CompleteImprovArgs {
    player_text: String,
}

#[async_trait]
impl Tool for CompleteImprovTool {
    fn name(&self) -> &str {
        "complete_improv"
    }

    fn description(&self) -> &str {
        "Close the current round with the player's performance and get the host's reaction."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {"player_text": {"type": "string"}},
            "required": ["player_text"],
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        match serde_json::from_value::<CompleteImprovArgs>(args) {
            Ok(parsed) => Ok(self.host.complete_improv(&parsed.player_text).await),
            Err(e) => Ok(invalid_args(e)),
        }
    }
}

pub struct FinishShowTool {
    host: Arc<ImprovHost>,
}

#[async_trait]
impl Tool for FinishShowTool {
    fn name(&self) -> &str {
        "finish_show"
    }

    fn description(&self) -> &str {
        "End the show now and get the closing summary."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        Ok(self.host.finish_show().await)
    }
}

pub struct SessionStatusTool {
    host: Arc<ImprovHost>,
}

#[async_trait]
impl Tool for SessionStatusTool {
    fn name(&self) -> &str {
        "session_status"
    }

    fn description(&self) -> &str {
        "Get a read-only snapshot of the show's state."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        Ok(self.host.session_status().await)
    }
}

/// Tool set for the improv host.
pub fn improv_toolset(host: Arc<ImprovHost>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SetPlayerTool { host: host.clone() }));
    registry.register(Arc::new(NextSceneTool { host: host.clone() }));
    registry.register(Arc::new(CompleteImprovTool { host: host.clone() }));
    registry.register(Arc::new(FinishShowTool { host: host.clone() }));
    registry.register(Arc::new(SessionStatusTool { host }));
    registry
}
