//! Single page annotation.
//!
//! Runs the same hooks as `build` for one file and prints the result,
//! which makes it easy to inspect the generated block.

use std::fs;
use std::io::{Write, stdout};

use anyhow::{Context, Result, bail};

use super::common::{load_plugin, render_page, write_file};
use crate::cli::PageArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::page::is_markdown;
use crate::utils::path::resolve_path;

/// Annotate one page, writing to `--write` or stdout.
pub fn run_page(args: &PageArgs, config: &SiteConfig) -> Result<()> {
    let output = annotate_file(args, config)?;

    if let Some(ref path) = args.write {
        write_file(path, &output)?;
        log!("page"; "wrote output to {}", path.display());
    } else {
        let mut stdout = stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn annotate_file(args: &PageArgs, config: &SiteConfig) -> Result<String> {
    let path = resolve_path(&args.path, &config.build.docs);
    if !path.is_file() {
        bail!("Page not found: {}", args.path.display());
    }
    if !is_markdown(&path) {
        bail!("Not a Markdown page: {}", path.display());
    }

    let source =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let plugin = load_plugin(config)?;

    render_page(&source, plugin.as_ref())
        .with_context(|| format!("Failed to annotate {}", config.root_relative(&path).display()))
}
