//! Author registry dump.
//!
//! Prints the loaded registry as a JSON object keyed by author id,
//! sorted by id so the output is stable across runs.

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::author::AuthorRegistry;
use crate::config::SiteConfig;

/// Load the registry and print it as JSON.
pub fn run_authors(pretty: bool, config: &SiteConfig) -> Result<()> {
    let registry = AuthorRegistry::load(
        &config.build.docs,
        &config.plugins.authors.authors_file,
    )?;
    println!("{}", format_registry(&registry, pretty)?);
    Ok(())
}

fn format_registry(registry: &AuthorRegistry, pretty: bool) -> Result<String> {
    let mut obj = Map::new();
    for (id, record) in registry.sorted() {
        obj.insert(id.to_string(), serde_json::to_value(record)?);
    }

    let output = JsonValue::Object(obj);
    let formatted = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(formatted)
}
