//! Catalog file loading.
//!
//! The catalog is read once at startup and never written. An unreadable or
//! malformed catalog is fatal: the merchant cannot operate without it.

use duet_core::catalog::{Catalog, Product};
use duet_core::error::{DuetError, Result};
use std::fs;
use std::path::Path;

/// Loads the product catalog from a JSON array file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .map_err(|e| DuetError::io(format!("failed to read catalog {:?}: {}", path, e)))?;

    let products: Vec<Product> = serde_json::from_str(&content)?;
    tracing::info!(count = products.len(), path = %path.display(), "loaded product catalog");
    Ok(Catalog::new(products))
}
