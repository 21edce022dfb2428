//! Utility functions and constants for markdown line handling.

/// Code block fence
pub const CODE_FENCE: &str = "```";

/// Prefix of an unordered list item
pub const BULLET: &str = "- ";

/// Count the leading `#` characters of a block
pub fn heading_level(block: &str) -> usize {
    block.bytes().take_while(|&b| b == b'#').count()
}

/// Number of an ordered list line of the form `<digit>. text`
pub fn ordered_item_number(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || bytes[1] != b'.' || bytes[2] != b' ' {
        return None;
    }
    (bytes[0] as char).to_digit(10)
}

/// Strip the `<number>. ` prefix of an ordered list line
pub fn strip_ordered_marker(line: &str) -> &str {
    match line.split_once(". ") {
        Some((number, rest))
            if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => line,
    }
}

/// Strip a leading `>` and one following space or tab
pub fn strip_quote_marker(line: &str) -> &str {
    let Some(rest) = line.strip_prefix('>') else {
        return line;
    };
    rest.strip_prefix(&[' ', '\t'][..]).unwrap_or(rest)
}

/// Join lines with single spaces, trimming each line
pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}
