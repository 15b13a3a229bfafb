//! Scenario file loading.
//!
//! Unlike the catalog, the scenario file is optional: a missing or
//! malformed file degrades to an empty deck with a warning, and the host
//! reports "no scenarios" at the first draw instead of failing startup.

use duet_core::improv::{Scenario, ScenarioDeck};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

/// Loads the scenario deck from a JSON file of the form
/// `{"scenarios": [{id, title, scenario}, ...]}`.
pub fn load_scenarios(path: &Path) -> ScenarioDeck {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "scenario file unreadable, starting with an empty deck");
            return ScenarioDeck::default();
        }
    };

    match serde_json::from_str::<ScenarioFile>(&content) {
        Ok(file) => {
            tracing::info!(count = file.scenarios.len(), path = %path.display(), "loaded scenario deck");
            ScenarioDeck::new(file.scenarios)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "scenario file malformed, starting with an empty deck");
            ScenarioDeck::default()
        }
    }
}
