//! Duet application layer.
//!
//! The two agents (shopping assistant and improv host), the merchant
//! service they share with the store, and the tool-call boundary the
//! conversational runtime drives.

pub mod bootstrap;
pub mod improv_host;
pub mod merchant;
pub mod shopping;
pub mod tool;
pub mod tools;

pub use bootstrap::{build_improv_host, build_shopping_assistant};
pub use improv_host::ImprovHost;
pub use merchant::MerchantService;
pub use shopping::ShoppingAssistant;
pub use tool::{Tool, ToolRegistry};
pub use tools::{improv_toolset, shopping_toolset};
