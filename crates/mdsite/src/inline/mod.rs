//! Inline markdown parsing.
//!
//! A text unit is turned into a flat sequence of [`Span`]s by a fixed series
//! of passes over a single plain span:
//!
//! 1. images `![alt](url)`
//! 2. links `[label](url)`
//! 3. bold `**`, italic `*` and `_`, code `` ` ``
//!
//! Styles do not nest. Italic markers inside a bold run stay literal.

mod extract;
mod span;
mod split;

pub use extract::{extract_markdown_images, extract_markdown_links};
pub use span::{Span, Style};
pub use split::{split_delimiter, split_images, split_links};

use mdsite_core::HtmlNode;

use crate::Result;

/// Delimiter passes in the order they run
pub const DELIMITERS: &[(&str, Style)] = &[
    ("**", Style::Bold),
    ("*", Style::Italic),
    ("_", Style::Italic),
    ("`", Style::Code),
];

/// Parse one text unit into inline spans
pub fn text_to_spans(text: &str) -> Result<Vec<Span>> {
    let spans = split_links(split_images(vec![Span::plain(text)]));

    DELIMITERS
        .iter()
        .try_fold(spans, |spans, &(delimiter, style)| {
            split_delimiter(spans, delimiter, style)
        })
}

/// Parse one text unit into HTML children, dropping empty spans
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?
        .iter()
        .filter(|span| !span.is_empty())
        .map(Span::to_html_node)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkdownError;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Span {
        Span::plain(text)
    }

    #[test]
    fn test_basic_text() {
        assert_eq!(
            text_to_spans("This is plain text").unwrap(),
            vec![plain("This is plain text")]
        );
    }

    #[test]
    fn test_underscore_italic() {
        assert_eq!(
            text_to_spans("This is _italic_ text").unwrap(),
            vec![plain("This is "), Style::Italic.span("italic"), plain(" text")]
        );
    }

    #[test]
    fn test_complex_example() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            text_to_spans(text).unwrap(),
            vec![
                plain("This is "),
                Style::Bold.span("text"),
                plain(" with an "),
                Style::Italic.span("italic"),
                plain(" word and a "),
                Style::Code.span("code block"),
                plain(" and an "),
                Span::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                plain(" and a "),
                Span::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_mixed_formatting_keeps_empty_spans() {
        assert_eq!(
            text_to_spans("**Bold** and *italic* and `code`").unwrap(),
            vec![
                plain(""),
                Style::Bold.span("Bold"),
                plain(" and "),
                Style::Italic.span("italic"),
                plain(" and "),
                Style::Code.span("code"),
                plain(""),
            ]
        );
    }

    #[test]
    fn test_nested_formatting_stays_literal() {
        assert_eq!(
            text_to_spans("**bold *italic* bold**").unwrap(),
            vec![plain(""), Style::Bold.span("bold *italic* bold"), plain("")]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(text_to_spans("").unwrap(), vec![plain("")]);
    }

    #[test]
    fn test_image_then_link_without_gap() {
        assert_eq!(
            text_to_spans("![alt](a.png)[text](b.com)").unwrap(),
            vec![Span::image("alt", "a.png"), Span::link("text", "b.com")]
        );
    }

    #[test]
    fn test_urls_are_not_split_on_delimiters() {
        assert_eq!(
            text_to_spans("[docs](https://example.com/a_b*c)").unwrap(),
            vec![Span::link("docs", "https://example.com/a_b*c")]
        );
    }

    #[test]
    fn test_odd_backticks_fail() {
        let err = text_to_spans("a `b` `c").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnmatchedDelimiter { ref delimiter, .. } if delimiter == "`"
        ));
    }

    #[test]
    fn test_text_to_children_drops_empty_spans() {
        let children = text_to_children("**Bold** and `code`").unwrap();
        let html: Vec<String> = children.iter().map(|c| c.to_html().unwrap()).collect();
        assert_eq!(html, vec!["<b>Bold</b>", " and ", "<code>code</code>"]);
    }

    #[test]
    fn test_text_to_children_keeps_image_without_alt() {
        let children = text_to_children("![](a.png)").unwrap();
        assert_eq!(children, vec![HtmlNode::image("a.png", "")]);
    }
}
