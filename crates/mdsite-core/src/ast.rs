//! HTML node tree
//!
//! This module defines the nodes the markdown engine builds. A tree is built
//! bottom-up per block, assembled under one root and serialized once.

use indexmap::IndexMap;

/// Attribute map. Insertion order is kept so rendering is deterministic.
pub type Attributes = IndexMap<String, String>;

/// An HTML node
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Node without children. A missing tag means raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },

    /// Element whose content is entirely its children
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Raw text, rendered verbatim
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Element wrapping a single text value, e.g. `<b>value</b>`
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Self-closing `<img>` leaf
    pub fn image(src: &str, alt: &str) -> Self {
        HtmlNode::Leaf {
            tag: Some("img".to_string()),
            value: None,
            attrs: Attributes::new(),
        }
        .with_attr("src", src)
        .with_attr("alt", alt)
    }

    /// Element with children
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        let attrs = match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        };
        attrs.insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().get(name).map(String::as_str)
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Children of a parent node; empty for leaves
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone().unwrap_or_default(),
            HtmlNode::Parent { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }
}
