//! Built-in block rules, in precedence order.

use super::{Filter, Rule};
use crate::blocks::BlockKind;
use crate::utilities::{heading_level, ordered_item_number, CODE_FENCE};

/// Create all built-in rules: heading, code, quote, unordered list, ordered list
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        heading_rule(),
        code_rule(),
        quote_rule(),
        unordered_list_rule(),
        ordered_list_rule(),
    ]
}

/// `#`..`######`, a space, then at least one more character
fn heading_rule() -> Rule {
    Rule::new(
        Filter::predicate(|block, _| {
            let level = heading_level(block);
            (1..=6).contains(&level)
                && block[level..].starts_with(' ')
                && block.len() > level + 1
        }),
        |block| BlockKind::Heading(heading_level(block).clamp(1, 6) as u8),
    )
}

fn code_rule() -> Rule {
    Rule::fixed(
        Filter::predicate(|_, lines| {
            lines.len() >= 2
                && lines.first().is_some_and(|l| l.starts_with(CODE_FENCE))
                && lines.last().is_some_and(|l| l.starts_with(CODE_FENCE))
        }),
        BlockKind::Code,
    )
}

fn quote_rule() -> Rule {
    Rule::fixed(Filter::line_prefix(">"), BlockKind::Quote)
}

fn unordered_list_rule() -> Rule {
    Rule::fixed(Filter::line_prefix("- "), BlockKind::UnorderedList)
}

/// Lines numbered `1. `, `2. `, ... with no gaps
fn ordered_list_rule() -> Rule {
    Rule::fixed(
        Filter::predicate(|_, lines| {
            lines
                .iter()
                .enumerate()
                .all(|(i, line)| ordered_item_number(line) == Some(i as u32 + 1))
        }),
        BlockKind::OrderedList,
    )
}
