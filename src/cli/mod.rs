//! Command-line interface module.

mod args;
pub mod authors;
pub mod build;
pub mod common;
pub mod page;

pub use args::{Cli, Commands, PageArgs};
