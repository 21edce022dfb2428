//! Rule and Filter types for block classification.

use crate::blocks::BlockKind;

/// Type alias for functions that derive a kind from a matched block
pub type KindFn = Box<dyn Fn(&str) -> BlockKind + Send + Sync>;

/// A filter determines which blocks a rule applies to
pub enum Filter {
    /// Every line starts with the prefix
    LinePrefix(String),
    /// Match using a predicate over the block and its lines
    Predicate(Box<dyn Fn(&str, &[&str]) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter requiring a prefix on every line
    pub fn line_prefix(prefix: &str) -> Self {
        Filter::LinePrefix(prefix.to_string())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &[&str]) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a block
    pub fn matches(&self, block: &str, lines: &[&str]) -> bool {
        match self {
            Filter::LinePrefix(prefix) => {
                lines.iter().all(|line| line.starts_with(prefix.as_str()))
            }
            Filter::Predicate(f) => f(block, lines),
        }
    }
}

/// A rule maps matching blocks to a block kind
pub struct Rule {
    /// Filter to determine which blocks this rule applies to
    pub filter: Filter,
    kind: KindFn,
}

impl Rule {
    /// Create a rule whose kind depends on the block
    pub fn new<F>(filter: Filter, kind: F) -> Self
    where
        F: Fn(&str) -> BlockKind + Send + Sync + 'static,
    {
        Self {
            filter,
            kind: Box::new(kind),
        }
    }

    /// Create a rule that always yields the same kind
    pub fn fixed(filter: Filter, kind: BlockKind) -> Self {
        Self::new(filter, move |_| kind)
    }

    /// Kind of a block this rule matched
    pub fn kind(&self, block: &str) -> BlockKind {
        (self.kind)(block)
    }
}
