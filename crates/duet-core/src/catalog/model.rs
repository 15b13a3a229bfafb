//! Product and catalog domain models.

use super::filter::ProductFilter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single product in the merchant catalog.
///
/// Products are static data: they are loaded once from the catalog file and
/// never written back. Descriptive fields beyond the filterable ones are
/// carried through verbatim in `extra` so the catalog file can grow fields
/// without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label (e.g. "hoodie", "shirt")
    #[serde(default)]
    pub category: String,
    /// Color label
    #[serde(default)]
    pub color: String,
    /// Size label
    #[serde(default)]
    pub size: String,
    /// Price as a plain integer in the catalog currency
    #[serde(default)]
    pub price: i64,
    /// Currency code; catalog entries without one default to INR
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Any additional descriptive fields from the catalog file
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// An in-memory, read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a list of products, preserving their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Looks up a product by id (linear scan).
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Returns the products matching every predicate of `filter`, in
    /// catalog order. An empty filter returns the full catalog.
    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}
