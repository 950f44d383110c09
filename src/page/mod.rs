//! Markdown page input: front matter splitting and page metadata.

mod frontmatter;
mod meta;

pub use frontmatter::Page;
pub use meta::{AuthorRefs, PageMeta};

use std::path::Path;

/// Check if a path is a Markdown page (`.md` / `.markdown`).
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "md" | "markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("docs/index.md")));
        assert!(is_markdown(Path::new("docs/Guide.MARKDOWN")));
        assert!(!is_markdown(Path::new("docs/authors.yaml")));
        assert!(!is_markdown(Path::new("docs/README")));
    }
}
