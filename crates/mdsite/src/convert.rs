//! Convert markdown blocks to an HTML node tree
//!
//! Each block becomes exactly one top-level node under a `<div>` root.

use mdsite_core::HtmlNode;

use crate::blocks::{split_blocks, BlockKind};
use crate::inline::text_to_children;
use crate::rules::classify;
use crate::utilities::{
    heading_level, join_lines, strip_ordered_marker, strip_quote_marker, BULLET,
};
use crate::Result;

/// Convert a markdown document to a `<div>` wrapping one node per block
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = split_blocks(markdown);
    log::debug!("converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Convert a single block to its HTML node
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    match classify(block) {
        BlockKind::Heading(level) => convert_heading(block, level),
        BlockKind::Code => Ok(convert_code(block)),
        BlockKind::Quote => convert_quote(block),
        BlockKind::UnorderedList => convert_list(block, "ul", |line| {
            line.strip_prefix(BULLET).unwrap_or(line)
        }),
        BlockKind::OrderedList => convert_list(block, "ol", strip_ordered_marker),
        BlockKind::Paragraph => convert_paragraph(block),
    }
}

fn convert_heading(block: &str, level: u8) -> Result<HtmlNode> {
    let content = block[heading_level(block)..].trim();
    let level = level.clamp(1, 6);
    Ok(HtmlNode::parent(
        &format!("h{}", level),
        text_to_children(content)?,
    ))
}

/// Inner lines of the fence, kept verbatim with a trailing newline
fn convert_code(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.split('\n').collect();
    let inner = match lines.len() {
        0..=2 => &[][..],
        n => &lines[1..n - 1],
    };

    let mut code = inner.join("\n");
    if !inner.is_empty() {
        code.push('\n');
    }

    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code)])
}

/// Quote lines are flattened into one line before inline parsing
fn convert_quote(block: &str) -> Result<HtmlNode> {
    let text = block
        .split('\n')
        .map(strip_quote_marker)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn convert_list<F>(block: &str, tag: &str, strip_marker: F) -> Result<HtmlNode>
where
    F: Fn(&str) -> &str,
{
    let items = block
        .split('\n')
        .map(|line| -> Result<HtmlNode> {
            let text = strip_marker(line).trim();
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(tag, items))
}

fn convert_paragraph(block: &str) -> Result<HtmlNode> {
    let text = join_lines(block.split('\n'));
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}
