//! # mdsite-cli
//!
//! Static site generator built on the `mdsite` markdown engine.
//!
//! A build copies the static tree into the output directory, then renders every
//! markdown file of the content tree into the page template at the mirrored
//! path (`blog/post.md` becomes `blog/post.html`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use mdsite_cli::{build_site, Config};
//!
//! let config = Config::load_or_default("mdsite.toml").unwrap();
//! let report = build_site(&config).unwrap();
//! println!("{} pages generated", report.generated.len());
//! ```

pub mod config;
mod page;
mod site;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use page::{extract_title, generate_page, render_page, render_template};
pub use site::{build_site, copy_static, generate_pages_recursive, BuildReport};

use std::path::PathBuf;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: mdsite::MarkdownError,
    },

    #[error("No h1 header found in {path}")]
    MissingTitle { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
