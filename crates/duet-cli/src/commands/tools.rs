//! Prints the tool declarations the voice runtime would register.

use anyhow::Result;
use duet_application::{
    build_improv_host, build_shopping_assistant, improv_toolset, shopping_toolset,
};
use duet_core::config::AppConfig;
use serde_json::json;

pub fn run(config: &AppConfig) -> Result<()> {
    let shopping = shopping_toolset(build_shopping_assistant(config)?);
    let improv = improv_toolset(build_improv_host(config));

    let declarations = json!({
        "shopping_assistant": shopping.specs(),
        "improv_host": improv.specs(),
    });
    println!("{}", serde_json::to_string_pretty(&declarations)?);
    Ok(())
}
