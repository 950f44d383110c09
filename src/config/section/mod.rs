//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module    | TOML Section   | Purpose                          |
//! |-----------|----------------|----------------------------------|
//! | `build`   | `[build]`      | Docs and output directories      |
//! | `plugins` | `[plugins.*]`  | Plugin options (authors)         |

mod build;
mod plugins;

pub use build::BuildSectionConfig;
pub use plugins::{AuthorsPluginConfig, PluginsSectionConfig};
