//! `[plugins]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [plugins.authors]
//! enable = true                  # Run the authors plugin
//! authors_file = "authors.yaml"  # Registry file (relative to `[build] docs`)
//! skip_without_authors = false   # Leave pages without `authors` untouched
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const AUTHORS_FILE: FieldPath = FieldPath::new("plugins.authors.authors_file");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsSectionConfig {
    pub authors: AuthorsPluginConfig,
}

/// `[plugins.authors]` options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorsPluginConfig {
    pub enable: bool,

    /// Author registry, relative to the docs directory.
    pub authors_file: PathBuf,

    /// Skip the authors block on pages without an `authors` key.
    ///
    /// Default `false`: every page gets the wrapper and title.
    pub skip_without_authors: bool,
}

impl Default for AuthorsPluginConfig {
    fn default() -> Self {
        Self {
            enable: true,
            authors_file: "authors.yaml".into(),
            skip_without_authors: false,
        }
    }
}

impl AuthorsPluginConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.authors_file.as_os_str().is_empty() {
            diag.error(AUTHORS_FILE, "must not be empty");
        } else if self.authors_file.is_absolute() {
            diag.error_with_hint(
                AUTHORS_FILE,
                "must be relative to the docs directory",
                format!(
                    "use a path like `{}`",
                    self.authors_file
                        .file_name()
                        .map(|n| n.to_string_lossy())
                        .unwrap_or_default()
                ),
            );
        }
    }
}
