//! Author registry error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort registry loading.
///
/// A missing registry file is not an error: it degrades to an empty
/// registry with a warning.
#[derive(Debug, Error)]
pub enum AuthorsError {
    #[error("IO error when reading authors file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Authors file `{0}` is not a valid author mapping")]
    Parse(PathBuf, #[source] serde_yaml::Error),
}
