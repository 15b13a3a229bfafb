//! Order repository trait.

use super::model::Order;
use crate::error::Result;
use async_trait::async_trait;

/// Repository trait for order persistence.
///
/// The backing store is a flat list; lookups are linear scans and every
/// mutation rewrites the whole list through the atomic storage layer.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Appends a new order to the store.
    async fn append(&self, order: &Order) -> Result<()>;

    /// All orders in insertion order.
    async fn all(&self) -> Result<Vec<Order>>;

    /// The most recently appended order, if any.
    async fn last(&self) -> Result<Option<Order>>;

    /// Looks up an order by id.
    async fn find_by_id(&self, order_id: &str) -> Result<Option<Order>>;

    /// Removes every line matching `product_id` from the order with
    /// `order_id`, recomputes its total and persists the store in a single
    /// read-modify-write. Returns the updated order, or `None` when no such
    /// order exists.
    async fn remove_item(&self, order_id: &str, product_id: &str) -> Result<Option<Order>>;
}
