//! Merchant service: catalog queries and the order store.
//!
//! The catalog lives in memory after the initial load; orders go through
//! the repository on every call. Tool calls within a session arrive
//! sequentially, so there is no caching between operations.

use duet_core::catalog::{Catalog, Product, ProductFilter};
use duet_core::error::Result;
use duet_core::order::{LineItem, Order, OrderItemRequest, OrderRepository};
use std::sync::Arc;

pub struct MerchantService {
    catalog: Catalog,
    orders: Arc<dyn OrderRepository>,
    currency: String,
}

impl MerchantService {
    pub fn new(catalog: Catalog, orders: Arc<dyn OrderRepository>, currency: impl Into<String>) -> Self {
        Self {
            catalog,
            orders,
            currency: currency.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products matching the filter, in catalog order.
    pub fn list_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.catalog.search(filter)
    }

    /// Creates and persists an order from requested line items.
    ///
    /// Items referencing unknown product ids are dropped, not errors; the
    /// total covers only the resolved lines. I/O faults propagate.
    pub async fn create_order(&self, requests: &[OrderItemRequest]) -> Result<Order> {
        let mut items = Vec::new();
        for request in requests {
            match self.catalog.find(&request.product_id) {
                Some(product) => items.push(LineItem {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    quantity: request.quantity,
                    unit_price: product.price,
                }),
                None => {
                    tracing::warn!(product_id = %request.product_id, "dropping unknown product from order");
                }
            }
        }

        let order = Order::new(items, self.currency.clone());
        self.orders.append(&order).await?;
        tracing::info!(order_id = %order.id, total = order.total, "order created");
        Ok(order)
    }

    /// The most recently created order, if any.
    pub async fn last_order(&self) -> Result<Option<Order>> {
        self.orders.last().await
    }

    /// Removes all lines for `product_id` from the order, recomputing the
    /// total before persisting. `None` when the order id is unknown.
    pub async fn remove_item_from_order(
        &self,
        order_id: &str,
        product_id: &str,
    ) -> Result<Option<Order>> {
        self.orders.remove_item(order_id, product_id).await
    }
}
