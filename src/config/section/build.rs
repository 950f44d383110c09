//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! docs = "docs"      # Documentation source root (relative to site root)
//! output = "site"    # Annotated Markdown output (relative to site root)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DOCS: FieldPath = FieldPath::new("build.docs");
const OUTPUT: FieldPath = FieldPath::new("build.output");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Documentation source directory.
    pub docs: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            docs: "docs".into(),
            output: "site".into(),
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    /// Validate normalized paths.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.docs.is_dir() {
            diag.error_with_hint(
                DOCS,
                format!("docs directory `{}` not found", self.docs.display()),
                "set `[build] docs` or pass `--docs <DIR>`",
            );
        }

        if self.output == self.docs {
            diag.error(OUTPUT, "output directory must differ from docs directory");
        } else if self.docs.starts_with(&self.output) {
            diag.error(OUTPUT, "output directory must not contain the docs directory");
        } else if self.output.starts_with(&self.docs) {
            diag.error_with_hint(
                OUTPUT,
                "output directory must not be inside the docs directory",
                "annotated pages would be picked up again on the next build",
            );
        }
    }
}
