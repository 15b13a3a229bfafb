//! Product catalog domain module.
//!
//! The catalog is a read-only list of products loaded once at startup.
//! Filtering is the only query operation; results always preserve catalog
//! order.

mod filter;
mod model;

pub use filter::{FilterError, ProductFilter};
pub use model::{Catalog, Product};
