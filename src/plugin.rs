//! Authors plugin lifecycle.
//!
//! The host drives two hooks:
//!
//! 1. [`AuthorsPlugin::on_config`] - once per build, loads the registry
//! 2. [`AuthorsPlugin::on_page_markdown`] - once per page, prepends the block
//!
//! The registry is owned immutably after `on_config`, so page hooks can run
//! on any number of threads with `&AuthorsPlugin`.

use anyhow::Result;

use crate::author::AuthorRegistry;
use crate::config::{AuthorsPluginConfig, SiteConfig};
use crate::page::PageMeta;
use crate::render::annotate;
use crate::utils::plural_count;
use crate::debug;

#[derive(Debug)]
pub struct AuthorsPlugin {
    registry: AuthorRegistry,
    skip_without_authors: bool,
}

impl AuthorsPlugin {
    /// Load the registry from `[build].docs` + `[plugins.authors].authors_file`.
    pub fn on_config(config: &SiteConfig) -> Result<Self> {
        let options = &config.plugins.authors;
        let registry = AuthorRegistry::load(&config.build.docs, &options.authors_file)?;

        debug!("authors"; "loaded {}", plural_count(registry.len(), "author"));

        Ok(Self::new(registry, options))
    }

    pub fn new(registry: AuthorRegistry, options: &AuthorsPluginConfig) -> Self {
        Self {
            registry,
            skip_without_authors: options.skip_without_authors,
        }
    }

    /// Annotate one page body.
    ///
    /// Returns the body unchanged only when `skip_without_authors` is set
    /// and the page has no `authors` key.
    pub fn on_page_markdown(&self, markdown: &str, meta: &PageMeta) -> String {
        if self.skip_without_authors && meta.authors.is_none() {
            return markdown.to_string();
        }
        annotate(markdown, meta.authors.as_ref(), &self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::page::AuthorRefs;
    use std::fs;
    use tempfile::TempDir;

    fn plugin(skip_without_authors: bool) -> AuthorsPlugin {
        let registry = AuthorRegistry::from_yaml_str("alice:\n  name: Alice\n").unwrap();
        let options = AuthorsPluginConfig {
            skip_without_authors,
            ..Default::default()
        };
        AuthorsPlugin::new(registry, &options)
    }

    #[test]
    fn test_on_config_loads_from_docs_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("people.yaml"), "alice:\n  name: Alice\n").unwrap();

        let mut config = test_parse_config("[plugins.authors]\nauthors_file = \"people.yaml\"");
        config.build.docs = dir.path().to_path_buf();

        let plugin = AuthorsPlugin::on_config(&config).unwrap();
        let meta = PageMeta {
            authors: Some(AuthorRefs::One("alice".into())),
        };
        let out = plugin.on_page_markdown("body", &meta);
        assert!(out.contains(r#"<p class="author-name">Alice</p>"#));
    }

    #[test]
    fn test_on_config_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.docs = dir.path().to_path_buf();

        let plugin = AuthorsPlugin::on_config(&config).unwrap();
        let meta = PageMeta {
            authors: Some(AuthorRefs::One("alice".into())),
        };
        let out = plugin.on_page_markdown("body", &meta);
        assert!(out.contains("<div class='authors-list'></div>"));
        assert!(!out.contains("author-card"));
    }

    #[test]
    fn test_on_config_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authors.yaml"), "alice: [").unwrap();
        let mut config = test_parse_config("");
        config.build.docs = dir.path().to_path_buf();

        assert!(AuthorsPlugin::on_config(&config).is_err());
    }

    #[test]
    fn test_on_page_markdown_always_wraps_by_default() {
        let out = plugin(false).on_page_markdown("body", &PageMeta::default());
        assert!(out.starts_with(r#"<div class="authors-section">"#));
        assert!(out.ends_with("body"));
    }

    #[test]
    fn test_on_page_markdown_skip_without_authors() {
        let plugin = plugin(true);
        assert_eq!(plugin.on_page_markdown("body", &PageMeta::default()), "body");

        let meta = PageMeta {
            authors: Some(AuthorRefs::One("alice".into())),
        };
        let out = plugin.on_page_markdown("body", &meta);
        assert!(out.contains(r#"<p class="author-name">Alice</p>"#));
    }
}
