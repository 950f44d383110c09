//! Docs tree building.
//!
//! Build phases:
//! - **Init** - Clean (optional) and create the output directory
//! - **Config** - Run the plugin's `on_config` hook once
//! - **Collect** - Split the docs tree into Markdown pages and other files
//! - **Annotate** - Parallel `on_page_markdown` + file copies
//! - **Finalize** - Summary logging

use crate::{
    cli::common::{load_plugin, render_page, write_file},
    config::SiteConfig,
    log,
    logger::ProgressLine,
    page::is_markdown,
    plugin::AuthorsPlugin,
    utils::{path::collect_all_files, plural_count},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

/// Build statistics returned to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub pages: usize,
    pub files: usize,
}

/// Collected files for the build
struct BuildFiles {
    /// Markdown pages to annotate
    pages: Vec<PathBuf>,
    /// Everything else, copied verbatim
    files: Vec<PathBuf>,
}

/// Annotate every page in `[build].docs` and write the tree to `[build].output`.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildStats> {
    init_build(config)?;

    let plugin = load_plugin(config)?;
    let files = collect_build_files(config);
    let progress = create_progress(&files, quiet);

    let has_error = AtomicBool::new(false);
    let (pages_result, files_result) = rayon::join(
        || annotate_pages(&files.pages, config, plugin.as_ref(), &has_error, progress.as_ref()),
        || copy_files(&files.files, config, &has_error, progress.as_ref()),
    );
    pages_result?;
    files_result?;

    if let Some(p) = progress {
        p.finish();
    }

    let stats = BuildStats {
        pages: files.pages.len(),
        files: files.files.len(),
    };

    if !quiet {
        log!(
            "build";
            "annotated {}, copied {} to {}",
            plural_count(stats.pages, "page"),
            plural_count(stats.files, "file"),
            config.root_relative(&config.build.output).display()
        );
    }

    Ok(stats)
}

/// Prepare the output directory
fn init_build(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

/// Collect all files under docs, skipping the author registry
fn collect_build_files(config: &SiteConfig) -> BuildFiles {
    let registry_file = config.build.docs.join(&config.plugins.authors.authors_file);

    let (pages, files) = collect_all_files(&config.build.docs)
        .into_iter()
        .filter(|path| *path != registry_file)
        .partition(|path| is_markdown(path));

    BuildFiles { pages, files }
}

/// Create progress display if not quiet
fn create_progress(files: &BuildFiles, quiet: bool) -> Option<ProgressLine> {
    if quiet {
        return None;
    }
    Some(ProgressLine::new(&[
        ("markdown", files.pages.len()),
        ("files", files.files.len()),
    ]))
}

/// Map a docs file to its place in the output tree
fn output_path(path: &Path, config: &SiteConfig) -> Result<PathBuf> {
    let rel = path
        .strip_prefix(&config.build.docs)
        .with_context(|| format!("{} is outside the docs directory", path.display()))?;
    Ok(config.build.output.join(rel))
}

/// Annotate Markdown pages in parallel
fn annotate_pages(
    pages: &[PathBuf],
    config: &SiteConfig,
    plugin: Option<&AuthorsPlugin>,
    has_error: &AtomicBool,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    pages.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = annotate_page(path, config, plugin) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", config.root_relative(path).display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        if let Some(p) = progress {
            p.inc("markdown");
        }
        Ok(())
    })
}

fn annotate_page(path: &Path, config: &SiteConfig, plugin: Option<&AuthorsPlugin>) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let annotated = render_page(&source, plugin)?;
    write_file(&output_path(path, config)?, annotated)
}

/// Copy non-Markdown files in parallel
fn copy_files(
    files: &[PathBuf],
    config: &SiteConfig,
    has_error: &AtomicBool,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    files.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = copy_file(path, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", config.root_relative(path).display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        if let Some(p) = progress {
            p.inc("files");
        }
        Ok(())
    })
}

fn copy_file(path: &Path, config: &SiteConfig) -> Result<()> {
    let dest = output_path(path, config)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy {} to {}", path.display(), dest.display()))?;
    Ok(())
}
