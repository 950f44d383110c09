//! Author registry: profiles keyed by author id.
//!
//! - [`AuthorRecord`] / [`SocialLink`] - one profile from `authors.yaml`
//! - [`AuthorRegistry`] - the id -> profile mapping, loaded once per build
//! - [`AuthorsError`] - fatal loading errors

mod error;
mod record;
mod registry;

pub use error::AuthorsError;
pub use record::{AuthorRecord, SocialLink};
pub use registry::AuthorRegistry;
