//! Front matter detection for Markdown pages.
//!
//! A page may open with a YAML block (`---` ... `---` or `...`) or a TOML
//! block (`+++` ... `+++`). The raw block is kept so it can be written back
//! unchanged ahead of the annotated body.

use anyhow::{Result, anyhow};

use super::PageMeta;

/// Front matter syntax, chosen by the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrontMatterKind {
    Yaml,
    Toml,
}

impl FrontMatterKind {
    fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }

    fn is_closing(self, line: &str) -> bool {
        match self {
            Self::Yaml => line == "---" || line == "...",
            Self::Toml => line == "+++",
        }
    }
}

/// A Markdown page split into front matter and body.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub meta: PageMeta,
    /// Raw front matter block including delimiters, empty if none.
    pub frontmatter: &'a str,
    /// Markdown after the front matter block.
    pub body: &'a str,
}

impl<'a> Page<'a> {
    /// Split `source` and parse its front matter.
    ///
    /// Pages without front matter get default metadata and the whole
    /// source as body.
    pub fn parse(source: &'a str) -> Result<Self> {
        let Some((kind, inner, end)) = split_frontmatter(source) else {
            return Ok(Self {
                meta: PageMeta::default(),
                frontmatter: "",
                body: source,
            });
        };

        let meta = parse_meta(kind, inner)?;
        Ok(Self {
            meta,
            frontmatter: &source[..end],
            body: &source[end..],
        })
    }
}

/// Parse front matter content with the matching deserializer.
fn parse_meta(kind: FrontMatterKind, inner: &str) -> Result<PageMeta> {
    if inner.trim().is_empty() {
        return Ok(PageMeta::default());
    }
    match kind {
        FrontMatterKind::Yaml => serde_yaml::from_str(inner)
            .map_err(|e| anyhow!("Invalid YAML frontmatter: {}", e)),
        FrontMatterKind::Toml => {
            toml::from_str(inner).map_err(|e| anyhow!("Invalid TOML frontmatter: {}", e))
        }
    }
}

/// Locate the front matter block.
///
/// Returns `(kind, inner, end)` where `inner` is the text between the
/// delimiter lines and `end` is the byte offset just past the closing line.
fn split_frontmatter(source: &str) -> Option<(FrontMatterKind, &str, usize)> {
    let source_start = source.strip_prefix('\u{feff}').map_or(0, |_| '\u{feff}'.len_utf8());
    let rest = &source[source_start..];

    let first_end = rest.find('\n')?;
    let kind = FrontMatterKind::from_delimiter(trim_line(&rest[..first_end]))?;

    let inner_start = source_start + first_end + 1;
    let mut offset = inner_start;
    for line in source[inner_start..].split_inclusive('\n') {
        if kind.is_closing(trim_line(line)) {
            return Some((kind, &source[inner_start..offset], offset + line.len()));
        }
        offset += line.len();
    }

    None
}

#[inline]
fn trim_line(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r', ' ', '\t'])
}
