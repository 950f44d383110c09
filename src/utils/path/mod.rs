//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization and directory walking

pub mod fs;

pub use fs::{collect_all_files, normalize_path, resolve_path};
