//! JSON-file-backed order repository.

use crate::storage::AtomicJsonFile;
use async_trait::async_trait;
use duet_core::error::Result;
use duet_core::order::{Order, OrderRepository};
use std::path::PathBuf;

/// Order store persisted as a flat JSON array.
///
/// Every operation deserializes the whole list; mutations rewrite it in
/// full through the atomic storage layer. Lookups are linear scans. This
/// matches the store's contract: small data, sequential tool calls, the
/// rename as the single commit point.
pub struct JsonOrderRepository {
    file: AtomicJsonFile<Vec<Order>>,
}

impl JsonOrderRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates the orders file as an empty array when absent.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.file.load()?.is_none() {
            tracing::info!(path = %self.file.path().display(), "creating empty order store");
            self.file.save(&Vec::new())?;
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Order>> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

#[async_trait]
impl OrderRepository for JsonOrderRepository {
    async fn append(&self, order: &Order) -> Result<()> {
        let order = order.clone();
        self.file.update(Vec::new(), move |orders| {
            orders.push(order);
        })
    }

    async fn all(&self) -> Result<Vec<Order>> {
        self.load_all()
    }

    async fn last(&self) -> Result<Option<Order>> {
        Ok(self.load_all()?.into_iter().last())
    }

    async fn find_by_id(&self, order_id: &str) -> Result<Option<Order>> {
        Ok(self.load_all()?.into_iter().find(|o| o.id == order_id))
    }

    async fn remove_item(&self, order_id: &str, product_id: &str) -> Result<Option<Order>> {
        self.file.update(Vec::new(), |orders| {
            let order = orders.iter_mut().find(|o| o.id == order_id)?;
            order.remove_item(product_id);
            Some(order.clone())
        })
    }
}
