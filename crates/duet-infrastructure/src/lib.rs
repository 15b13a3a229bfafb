//! Duet infrastructure layer.
//!
//! File-backed implementations of the persistence seams defined in
//! `duet-core`: atomic JSON storage, catalog and scenario loaders, and the
//! JSON order repository.

pub mod catalog_loader;
pub mod json_order_repository;
pub mod scenario_loader;
pub mod storage;

pub use catalog_loader::load_catalog;
pub use json_order_repository::JsonOrderRepository;
pub use scenario_loader::load_scenarios;
pub use storage::AtomicJsonFile;
