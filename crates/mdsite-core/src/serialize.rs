//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into HTML text. Values and attribute values
//! are written as-is; callers supply safe content.

use crate::ast::{Attributes, HtmlNode};
use crate::{HtmlError, Result};

/// Serialize a node tree to an HTML string
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(4096);
    render_node(node, &mut output)?;
    Ok(output)
}

impl HtmlNode {
    /// Serialize this node and its descendants
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            render_leaf(tag.as_deref(), value.as_deref(), attrs, out)
        }
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => render_parent(tag.as_deref(), children, attrs, out),
    }
}

fn render_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attrs: &Attributes,
    out: &mut String,
) -> Result<()> {
    if tag == Some("img") {
        let src = attrs.get("src").ok_or_else(|| HtmlError::MissingAttribute {
            tag: "img".to_string(),
            attribute: "src",
        })?;
        let alt = attrs.get("alt").map(String::as_str).unwrap_or("");
        out.push_str("<img src=\"");
        out.push_str(src);
        out.push_str("\" alt=\"");
        out.push_str(alt);
        out.push_str("\" />");
        return Ok(());
    }

    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(HtmlError::MissingValue {
                tag: tag.map(str::to_string),
            })
        }
    };

    let Some(tag) = tag else {
        out.push_str(value);
        return Ok(());
    };

    open_tag(tag, attrs, out);
    out.push_str(value);
    close_tag(tag, out);
    Ok(())
}

fn render_parent(
    tag: Option<&str>,
    children: &[HtmlNode],
    attrs: &Attributes,
    out: &mut String,
) -> Result<()> {
    let tag = tag.ok_or(HtmlError::MissingTag)?;
    if children.is_empty() {
        return Err(HtmlError::NoChildren {
            tag: tag.to_string(),
        });
    }

    open_tag(tag, attrs, out);
    for child in children {
        render_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attrs(attrs, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Each attribute renders as ` key="value"`, in insertion order
fn render_attrs(attrs: &Attributes, out: &mut String) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
