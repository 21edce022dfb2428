//! Inline span types.

use mdsite_core::HtmlNode;

/// A typed run of inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text
    Plain(String),

    /// Strong emphasis
    Bold(String),

    /// Emphasis
    Italic(String),

    /// Inline code
    Code(String),

    /// Link with label and URL
    Link { text: String, url: String },

    /// Image with alt text and URL
    Image { alt: String, url: String },
}

/// Span kinds a delimiter pass can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// Wrap text in a span of this style
    pub fn span(self, text: impl Into<String>) -> Span {
        let text = text.into();
        match self {
            Style::Bold => Span::Bold(text),
            Style::Italic => Span::Italic(text),
            Style::Code => Span::Code(text),
        }
    }
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// Display text: the literal content, the link label or the image alt text
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// URL of a link or image
    pub fn target(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Whether this span contributes no HTML.
    ///
    /// Zero-length spans left behind by delimiter splitting are dropped. An
    /// image still renders without alt text, so it is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Span::Image { .. } => false,
            other => other.text().is_empty(),
        }
    }

    /// Convert to the HTML leaf for this span
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            Span::Plain(text) => HtmlNode::text(text.as_str()),
            Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
            Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
            Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
            Span::Link { text, url } => HtmlNode::leaf("a", text.as_str()).with_attr("href", url),
            Span::Image { alt, url } => HtmlNode::image(url, alt),
        }
    }
}
