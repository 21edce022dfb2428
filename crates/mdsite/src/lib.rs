//! # mdsite
//!
//! Convert a restricted markdown dialect to HTML.
//!
//! ## Design
//!
//! A document goes through three stages:
//!
//! - **Blocks**: the text is split on blank lines and each block is classified
//!   by an ordered rule table (heading, code, quote, unordered list, ordered
//!   list, paragraph)
//! - **Inline spans**: block text is cut into plain, bold, italic, code, link
//!   and image spans by a fixed sequence of passes
//! - **HTML tree**: blocks and spans become an [`HtmlNode`] tree rooted at a
//!   `<div>`, serialized by `mdsite-core`
//!
//! Styles do not nest and no HTML escaping is applied to text.
//!
//! ## Example
//!
//! ```rust
//! let html = mdsite::markdown_to_html("# Hello World\n\nThis is **bold** and _italic_.").unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hello World</h1><p>This is <b>bold</b> and <i>italic</i>.</p></div>"
//! );
//! ```

mod blocks;
mod convert;
pub mod inline;
mod rules;
mod utilities;

pub use blocks::{split_blocks, BlockKind};
pub use convert::{block_to_html_node, markdown_to_html_node};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    text_to_children, text_to_spans, Span, Style,
};
pub use mdsite_core::{HtmlError, HtmlNode};
pub use rules::{builtin_rules, classify, Filter, KindFn, Rule, Rules};

/// Error type for markdown conversion
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("Unmatched delimiter `{delimiter}` in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("Invalid HTML tree: {0}")]
    Html(#[from] HtmlError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Convert a markdown document to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}
