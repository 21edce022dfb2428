//! Whole-site builds: static asset copy and recursive page generation.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::page::{read, write_page};
use crate::{Config, Result, SiteError};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Outcome of a batch page generation
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in traversal order
    pub generated: Vec<PathBuf>,
    /// Source documents that could not be turned into a page
    pub failed: Vec<(PathBuf, SiteError)>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate a page for every markdown file under `content_dir`, mirroring the
/// tree into `dest_dir`.
///
/// A document that fails to convert is logged and recorded in the report; the
/// batch continues. Errors reading the template or walking directories abort.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<BuildReport> {
    let template = read(template_path)?;
    let mut report = BuildReport::default();

    for entry in walk(content_dir) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            log::warn!("Skipping non-markdown file {}", path.display());
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };

        let dest = dest_dir.join(relative).with_extension(HTML_EXTENSION);
        match write_page(path, &template, &dest, base_path) {
            Ok(()) => report.generated.push(dest),
            Err(err) => {
                log::error!("{}", err);
                report.failed.push((path.to_path_buf(), err));
            }
        }
    }

    Ok(report)
}

/// Replace `dst` with a recursive copy of `src`
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        log::debug!("Removing {}", dst.display());
        fs::remove_dir_all(dst).map_err(|source| SiteError::Write {
            path: dst.to_path_buf(),
            source,
        })?;
    }

    for entry in walk(src) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| SiteError::Write {
                path: target.clone(),
                source,
            })?;
        } else {
            log::info!("Copying {} to {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(|source| SiteError::Copy {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Copy static assets, then generate every page
pub fn build_site(config: &Config) -> Result<BuildReport> {
    log::info!(
        "Building site from {} into {}",
        config.content_dir.display(),
        config.output_dir.display()
    );

    copy_static(&config.static_dir, &config.output_dir)?;
    let report = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )?;

    log::info!(
        "Generated {} pages, {} failed",
        report.generated.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Depth-first walk of `root`, entries sorted by file name within each directory
fn walk(root: &Path) -> impl Iterator<Item = Result<DirEntry>> + '_ {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| {
            entry.map_err(|err| SiteError::Read {
                path: err.path().unwrap_or(root).to_path_buf(),
                source: err.into(),
            })
        })
}
