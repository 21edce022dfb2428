//! Block splitting.

/// Block-level classification of a markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` heading with its level
    Heading(u8),
    /// Fenced code between two ``` lines
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence
    OrderedList,
    Paragraph,
}

/// Split a document into blocks on blank lines.
///
/// `\n` and `\r\n` terminators are both accepted and may be mixed. Each block is
/// trimmed as a whole; internal line breaks are normalized to `\n`.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(lines: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let block = lines.join("\n");
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
    lines.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_blocks() {
        let md = "This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_multiple_blank_lines() {
        let md = "First block\n\n\n\nSecond block\n\n\nThird block";
        assert_eq!(
            split_blocks(md),
            vec!["First block", "Second block", "Third block"]
        );
    }

    #[test]
    fn test_leading_trailing_whitespace() {
        let md = "   \n   First block with spaces  \n   \n   Second block with tabs\t\n   \n      Third block with indentation   \n   ";
        assert_eq!(
            split_blocks(md),
            vec![
                "First block with spaces",
                "Second block with tabs",
                "Third block with indentation",
            ]
        );
    }

    #[test]
    fn test_internal_indentation_is_kept() {
        assert_eq!(split_blocks("  a\n  b  "), vec!["a\n  b"]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n\t\n   \n").is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let md = "First block\r\nstill first\r\n\r\nSecond block\r\n\r\nThird block";
        assert_eq!(
            split_blocks(md),
            vec!["First block\nstill first", "Second block", "Third block"]
        );
    }

    #[test]
    fn test_mixed_line_endings() {
        let md = "First block\n\r\nSecond block\r\n\nThird block";
        assert_eq!(
            split_blocks(md),
            vec!["First block", "Second block", "Third block"]
        );
    }
}
