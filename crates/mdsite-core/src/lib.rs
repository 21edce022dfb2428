//! mdsite-core - HTML node tree and serialization
//!
//! This crate provides the HTML node model produced by the `mdsite` markdown
//! engine and the `to_html` serialization of that model.
//!
//! # Architecture
//!
//! ```text
//!                        ┌───────────┐
//! Markdown ──mdsite────▶ │ HtmlNode  │ ──to_html──▶ HTML String
//!                        │   tree    │
//!                        └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "div",
//!     vec![
//!         HtmlNode::parent("h1", vec![HtmlNode::text("Hello World")]),
//!         HtmlNode::parent(
//!             "p",
//!             vec![
//!                 HtmlNode::text("This is "),
//!                 HtmlNode::leaf("b", "bold"),
//!                 HtmlNode::text(" text."),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let html = tree.to_html().unwrap();
//! assert_eq!(html, "<div><h1>Hello World</h1><p>This is <b>bold</b> text.</p></div>");
//! ```

mod ast;
mod serialize;

pub use ast::{Attributes, HtmlNode};
pub use serialize::render;

/// Error raised when a node tree cannot be serialized.
///
/// These indicate a malformed tree (a builder defect), not malformed markdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("<{tag}> requires the `{attribute}` attribute")]
    MissingAttribute { tag: String, attribute: &'static str },

    #[error("leaf node {} missing value", describe_tag(.tag))]
    MissingValue { tag: Option<String> },

    #[error("parent node missing tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    NoChildren { tag: String },
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("<{}>", tag),
        None => "(raw text)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, HtmlError>;
