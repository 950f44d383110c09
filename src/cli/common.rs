//! Common utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::debug;
use crate::page::Page;
use crate::plugin::AuthorsPlugin;

/// Run `on_config` if the authors plugin is enabled.
pub fn load_plugin(config: &SiteConfig) -> Result<Option<AuthorsPlugin>> {
    if !config.plugins.authors.enable {
        debug!("authors"; "plugin disabled, pages pass through unchanged");
        return Ok(None);
    }
    AuthorsPlugin::on_config(config).map(Some)
}

/// Annotate one page source.
///
/// Front matter is written back unchanged ahead of the annotated body.
/// Without a plugin the source is returned as-is.
pub fn render_page(source: &str, plugin: Option<&AuthorsPlugin>) -> Result<String> {
    let Some(plugin) = plugin else {
        return Ok(source.to_string());
    };

    let page = Page::parse(source)?;
    let body = plugin.on_page_markdown(page.body, &page.meta);

    let mut out = String::with_capacity(page.frontmatter.len() + body.len());
    out.push_str(page.frontmatter);
    out.push_str(&body);
    Ok(out)
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
