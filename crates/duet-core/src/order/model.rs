//! Order domain models.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of an order or cart: a product reference with quantity and the
/// unit price captured at the time the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl LineItem {
    /// quantity x unit price for this line.
    pub fn subtotal(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

/// A requested order line as sent by the conversational layer:
/// a product id plus an optional quantity defaulting to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// A persisted order.
///
/// Invariant: `total` always equals the sum of `subtotal()` over `items`.
/// Every mutation of `items` must go through a method that recomputes it
/// before the order is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order id: "ORD" + UTC timestamp + 4-char random suffix. Practically
    /// unlikely to collide, not guaranteed unique.
    pub id: String,
    pub items: Vec<LineItem>,
    pub total: i64,
    pub currency: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

impl Order {
    /// Creates a new order from resolved line items, computing the total
    /// and generating an id.
    pub fn new(items: Vec<LineItem>, currency: impl Into<String>) -> Self {
        let mut order = Self {
            id: generate_order_id(),
            items,
            total: 0,
            currency: currency.into(),
            created_at: Utc::now().to_rfc3339(),
        };
        order.recompute_total();
        order
    }

    /// Recomputes `total` from the current items.
    pub fn recompute_total(&mut self) {
        self.total = self.items.iter().map(LineItem::subtotal).sum();
    }

    /// Removes every line item matching `product_id` and recomputes the
    /// total. Returns the number of lines removed.
    pub fn remove_item(&mut self, product_id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        let removed = before - self.items.len();
        if removed > 0 {
            self.recompute_total();
        }
        removed
    }
}

fn generate_order_id() -> String {
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(4).collect();
    format!("ORD{}{}", stamp, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: u32, unit_price: i64) -> LineItem {
        LineItem {
            product_id: product_id.to_string(),
            name: format!("item {}", product_id),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_new_order_computes_total() {
        let order = Order::new(vec![line("p1", 2, 1200), line("p2", 1, 2000)], "INR");
        assert_eq!(order.total, 4400);
        assert!(order.id.starts_with("ORD"));
        // "ORD" + 14-digit timestamp + 4-char suffix
        assert_eq!(order.id.len(), 3 + 14 + 4);
    }

    #[test]
    fn test_remove_item_removes_all_matching_lines() {
        let mut order = Order::new(
            vec![line("p1", 1, 100), line("p2", 1, 50), line("p1", 3, 100)],
            "INR",
        );
        assert_eq!(order.total, 450);

        let removed = order.remove_item("p1");
        assert_eq!(removed, 2);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, 50);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut order = Order::new(vec![line("p1", 2, 100), line("p2", 1, 50)], "INR");
        order.remove_item("p1");
        let total_after_first = order.total;

        let removed = order.remove_item("p1");
        assert_eq!(removed, 0);
        assert_eq!(order.total, total_after_first);
    }

    #[test]
    fn test_item_request_quantity_defaults_to_one() {
        let req: OrderItemRequest = serde_json::from_str(r#"{"product_id":"p1"}"#).unwrap();
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn test_order_ids_differ_across_orders() {
        let a = Order::new(vec![], "INR");
        let b = Order::new(vec![], "INR");
        assert_ne!(a.id, b.id);
    }
}
