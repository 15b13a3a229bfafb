//! Agent construction from configuration.
//!
//! Wires the infrastructure pieces (catalog, order store, scenario deck)
//! into ready-to-use agents. The catalog is required; the scenario deck is
//! not (the host degrades to "no scenarios").

use crate::improv_host::ImprovHost;
use crate::merchant::MerchantService;
use crate::shopping::ShoppingAssistant;
use duet_core::config::AppConfig;
use duet_core::error::Result;
use duet_infrastructure::{JsonOrderRepository, load_catalog, load_scenarios};
use std::sync::Arc;

/// Builds the shopping assistant: loads the catalog, opens (creating if
/// needed) the order store.
pub fn build_shopping_assistant(config: &AppConfig) -> Result<Arc<ShoppingAssistant>> {
    let catalog = load_catalog(&config.catalog_path())?;

    let repository = JsonOrderRepository::new(config.orders_path());
    repository.ensure_exists()?;

    let merchant = MerchantService::new(catalog, Arc::new(repository), config.currency.clone());
    Ok(Arc::new(ShoppingAssistant::new(Arc::new(merchant))))
}

/// Builds the improv host from the scenario file.
pub fn build_improv_host(config: &AppConfig) -> Arc<ImprovHost> {
    let deck = load_scenarios(&config.scenarios_path());
    Arc::new(ImprovHost::new(deck))
}
