//! In-memory author registry loaded from `authors.yaml`.
//!
//! The registry is built once per build, before any page is processed,
//! and is only read afterwards. Page workers share it as `&AuthorRegistry`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{AuthorRecord, AuthorsError};
use crate::utils::plural_count;
use crate::{debug, log};

/// Outcome of reading the registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// File found and parsed (possibly empty).
    Loaded,
    /// File does not exist; the registry is empty.
    Missing,
}

/// Mapping from author id to [`AuthorRecord`].
#[derive(Debug, Clone, Default)]
pub struct AuthorRegistry {
    authors: FxHashMap<String, AuthorRecord>,
}

impl AuthorRegistry {
    /// Load `<docs_dir>/<authors_file>`.
    ///
    /// A missing file logs one warning naming `authors_file` and yields an
    /// empty registry. A malformed file is an error.
    pub fn load(docs_dir: &Path, authors_file: &Path) -> Result<Self, AuthorsError> {
        Self::load_with(docs_dir, authors_file, |message| log!("warning"; "{}", message))
    }

    /// [`load`](Self::load) with warnings routed to `warn`.
    pub fn load_with<F>(docs_dir: &Path, authors_file: &Path, mut warn: F) -> Result<Self, AuthorsError>
    where
        F: FnMut(String),
    {
        let path = docs_dir.join(authors_file);
        let (registry, status) = Self::read(&path)?;

        match status {
            LoadStatus::Missing => warn(missing_file_warning(authors_file)),
            LoadStatus::Loaded => {
                debug!("authors"; "loaded {} from {}", plural_count(registry.len(), "author"), path.display())
            }
        }

        Ok(registry)
    }

    /// Read and parse a registry file without logging.
    pub fn read(path: &Path) -> Result<(Self, LoadStatus), AuthorsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok((Self::default(), LoadStatus::Missing));
            }
            Err(err) => return Err(AuthorsError::Io(path.to_path_buf(), err)),
        };

        let registry = Self::from_yaml_str(&content)
            .map_err(|err| AuthorsError::Parse(path.to_path_buf(), err))?;
        Ok((registry, LoadStatus::Loaded))
    }

    /// Parse registry YAML.
    ///
    /// Empty, comment-only and `null` documents yield an empty registry.
    /// Duplicate ids resolve to the last occurrence.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if is_blank_document(content) {
            return Ok(Self::default());
        }

        let authors: Option<FxHashMap<String, AuthorRecord>> = serde_yaml::from_str(content)?;
        Ok(Self {
            authors: authors.unwrap_or_default(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&AuthorRecord> {
        self.authors.get(id)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Resolve ids in order, skipping ids absent from the registry.
    pub fn resolve<'a, I>(&'a self, ids: I) -> impl Iterator<Item = &'a AuthorRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter_map(move |id| {
            let record = self.get(id);
            if record.is_none() {
                debug!("authors"; "unknown author id `{}`, skipped", id);
            }
            record
        })
    }

    /// All entries sorted by id.
    pub fn sorted(&self) -> Vec<(&str, &AuthorRecord)> {
        let mut entries: Vec<_> = self
            .authors
            .iter()
            .map(|(id, record)| (id.as_str(), record))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Warning line shown when the registry file does not exist.
pub fn missing_file_warning(authors_file: &Path) -> String {
    format!("Authors file '{}' not found.", authors_file.display())
}

/// True when the document has no content besides comments and markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const AUTHORS: &str = r#"
alice:
  name: Alice
  img: https://example.com/alice.png
  bio: Maintainer.
  socials:
    - name: GitHub
      icon: fa-brands fa-github
      link: https://github.com/alice
bob:
  name: Bob
  img: bob.png
  bio: Docs.
  socials: []
"#;

    #[test]
    fn test_from_yaml_str_keys() {
        let registry = AuthorRegistry::from_yaml_str(AUTHORS).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("bob").is_some());
        assert_eq!(registry.get("alice").unwrap().name, "Alice");
    }

    #[test]
    fn test_from_yaml_str_duplicate_last_wins() {
        let yaml = "alice:\n  name: First\nalice:\n  name: Second\n";
        let registry = AuthorRegistry::from_yaml_str(yaml).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("alice").unwrap().name, "Second");
    }

    #[test]
    fn test_from_yaml_str_empty_documents() {
        for doc in ["", "\n  \n", "# nobody yet\n", "~", "null"] {
            assert_eq!(AuthorRegistry::from_yaml_str(doc).unwrap().len(), 0, "{doc:?}");
        }
    }

    #[test]
    fn test_from_yaml_str_malformed() {
        assert!(AuthorRegistry::from_yaml_str("alice: [unclosed").is_err());
        // Top-level list instead of mapping
        assert!(AuthorRegistry::from_yaml_str("- alice\n- bob\n").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let (registry, status) = AuthorRegistry::read(&dir.path().join("authors.yaml")).unwrap();
        assert_eq!(status, LoadStatus::Missing);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_read_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("authors.yaml");
        fs::write(&path, AUTHORS).unwrap();

        let (registry, status) = AuthorRegistry::read(&path).unwrap();
        assert_eq!(status, LoadStatus::Loaded);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_read_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("authors.yaml");
        fs::write(&path, "alice: {name: [").unwrap();

        let err = AuthorRegistry::read(&path).unwrap_err();
        assert!(matches!(err, AuthorsError::Parse(ref p, _) if p == &path));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AuthorRegistry::read(dir.path()).unwrap_err();
        assert!(matches!(err, AuthorsError::Io(..)));
    }

    #[test]
    fn test_load_missing_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let registry = AuthorRegistry::load(dir.path(), Path::new("team.yaml")).unwrap();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_load_missing_file_warns_once() {
        let dir = TempDir::new().unwrap();
        let mut warnings = Vec::new();
        let registry =
            AuthorRegistry::load_with(dir.path(), Path::new("team.yaml"), |m| warnings.push(m))
                .unwrap();

        assert_eq!(registry.len(), 0);
        assert_eq!(warnings, vec!["Authors file 'team.yaml' not found.".to_string()]);
    }

    #[test]
    fn test_load_existing_file_does_not_warn() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("authors.yaml"), AUTHORS).unwrap();
        let mut warnings = Vec::new();
        AuthorRegistry::load_with(dir.path(), Path::new("authors.yaml"), |m| warnings.push(m))
            .unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_numeric_keys_are_text() {
        let registry = AuthorRegistry::from_yaml_str("123:\n  name: Num\n").unwrap();
        assert_eq!(registry.get("123").unwrap().name, "Num");
    }

    #[test]
    fn test_load_joins_docs_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("meta")).unwrap();
        fs::write(dir.path().join("meta/team.yaml"), AUTHORS).unwrap();

        let registry = AuthorRegistry::load(dir.path(), Path::new("meta/team.yaml")).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_file_warning_names_file() {
        let message = missing_file_warning(Path::new("authors.yaml"));
        assert_eq!(message, "Authors file 'authors.yaml' not found.");
    }

    #[test]
    fn test_resolve_keeps_order_and_skips_unknown() {
        let registry = AuthorRegistry::from_yaml_str(AUTHORS).unwrap();
        let names: Vec<_> = registry
            .resolve(["bob", "ghost", "alice"])
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_sorted_by_id() {
        let registry = AuthorRegistry::from_yaml_str("zed: {name: Z}\nann: {name: A}\n").unwrap();
        let ids: Vec<_> = registry.sorted().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["ann", "zed"]);
    }
}
