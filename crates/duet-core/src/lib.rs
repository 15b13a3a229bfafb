//! Duet domain layer.
//!
//! Domain models and logic for the two Duet agents: the shopping
//! assistant's catalog/cart/order types and the improv host's session state
//! machine. Persistence lives behind the repository traits defined here and
//! is implemented in `duet-infrastructure`.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod improv;
pub mod order;

// Re-export common error type
pub use error::{DuetError, Result};
