//! Order domain module.
//!
//! Orders are the only mutable persisted data. The repository trait is the
//! seam between the domain and the file-backed store; the domain model owns
//! the total-recomputation invariant.

mod model;
mod repository;

pub use model::{LineItem, Order, OrderItemRequest};
pub use repository::OrderRepository;
