//! Application configuration.
//!
//! Configuration is loaded from a TOML file. Every field has a default so a
//! missing file yields a fully working configuration pointing at the
//! platform data directory.

use crate::error::{DuetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for data file locations and store defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the catalog, orders and scenario files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Catalog file name (JSON array of products, read-only).
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    /// Orders file name (JSON array, rewritten on every mutation).
    #[serde(default = "default_orders_file")]
    pub orders_file: String,
    /// Scenario file name for the improv host.
    #[serde(default = "default_scenarios_file")]
    pub scenarios_file: String,
    /// Currency code applied to orders when a product carries none.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("duet"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn default_catalog_file() -> String {
    "catalog.json".to_string()
}

fn default_orders_file() -> String {
    "orders.json".to_string()
}

fn default_scenarios_file() -> String {
    "scenarios.json".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_file: default_catalog_file(),
            orders_file: default_orders_file(),
            scenarios_file: default_scenarios_file(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the given TOML file.
    ///
    /// A missing file returns the default configuration. A file that exists
    /// but cannot be read or parsed is a configuration error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| DuetError::config(format!("failed to read {:?}: {}", path, e)))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Full path to the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    /// Full path to the orders file.
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }

    /// Full path to the scenario file.
    pub fn scenarios_path(&self) -> PathBuf {
        self.data_dir.join(&self.scenarios_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join("duet.toml")).unwrap();
        assert_eq!(config.catalog_file, "catalog.json");
        assert_eq!(config.currency, "INR");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("duet.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "data_dir = \"/tmp/duet-test\"").unwrap();
        writeln!(f, "currency = \"USD\"").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/duet-test"));
        assert_eq!(config.currency, "USD");
        assert_eq!(config.orders_file, "orders.json");
        assert_eq!(
            config.orders_path(),
            PathBuf::from("/tmp/duet-test/orders.json")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("duet.toml");
        std::fs::write(&path, "data_dir = [not toml").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
