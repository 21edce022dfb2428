//! Rule system for block classification.
//!
//! Rules are checked in precedence order and the first match wins:
//! heading, code, quote, unordered list, ordered list. A block no rule
//! matches is a paragraph.

mod builtin;
mod rule;

pub use builtin::builtin_rules;
pub use rule::{Filter, KindFn, Rule};

use once_cell::sync::Lazy;

use crate::blocks::BlockKind;

static BUILTIN: Lazy<Rules> = Lazy::new(Rules::new);

/// Ordered collection of classification rules
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Find the first rule matching a block
    pub fn for_block(&self, block: &str) -> Option<&Rule> {
        let lines: Vec<&str> = block.split('\n').collect();
        self.rules
            .iter()
            .find(|rule| rule.filter.matches(block, &lines))
    }

    /// Classify a block, falling back to a paragraph
    pub fn classify(&self, block: &str) -> BlockKind {
        self.for_block(block)
            .map(|rule| rule.kind(block))
            .unwrap_or(BlockKind::Paragraph)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a block with the built-in rules
pub fn classify(block: &str) -> BlockKind {
    let kind = BUILTIN.classify(block);
    log::trace!("classified block as {:?}", kind);
    kind
}
