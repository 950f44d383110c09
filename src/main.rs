//! doc-authors - Author cards for Markdown documentation sites.

mod author;
mod cli;
mod config;
mod logger;
mod page;
mod plugin;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config, false).map(|_| ()),
        Commands::Page { args } => cli::page::run_page(args, &config),
        Commands::Authors { pretty } => cli::authors::run_authors(*pretty, &config),
    }
}
