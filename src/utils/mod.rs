//! Utility modules shared across the plugin and the CLI host.

pub mod html;
pub mod path;
pub mod plural;

pub use plural::plural_count;
