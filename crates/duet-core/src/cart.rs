//! Session-scoped shopping cart.
//!
//! A cart lives for the duration of one conversation. It is owned by the
//! shopping assistant and cleared on successful checkout; nothing about it
//! is persisted.

use crate::catalog::Product;
use crate::order::{LineItem, OrderItemRequest};

/// An ordered list of line items for the current conversation.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Adds a product to the cart, capturing its current price.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        self.items.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
        });
    }

    /// Removes every line matching `product_id`; returns how many were
    /// removed.
    pub fn remove(&mut self, product_id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        before - self.items.len()
    }

    /// Running total over all lines.
    pub fn total(&self) -> i64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// The cart contents as order line requests, for checkout.
    pub fn to_requests(&self) -> Vec<OrderItemRequest> {
        self.items
            .iter()
            .map(|item| OrderItemRequest {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {}", id),
            category: String::new(),
            color: String::new(),
            size: String::new(),
            price,
            currency: "INR".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 1200), 2);
        cart.add(&product("p2", 2000), 1);
        assert_eq!(cart.total(), 4400);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_remove_all_matching_lines() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 100), 1);
        cart.add(&product("p1", 100), 2);
        cart.add(&product("p2", 50), 1);

        assert_eq!(cart.remove("p1"), 2);
        assert_eq!(cart.total(), 50);
        assert_eq!(cart.remove("p1"), 0);
    }

    #[test]
    fn test_checkout_requests_preserve_quantities() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 1200), 3);
        let requests = cart.to_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].product_id, "p1");
        assert_eq!(requests[0].quantity, 3);
    }
}
