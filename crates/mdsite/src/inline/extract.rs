//! Image and link span extraction.
//!
//! Brackets and parentheses do not nest: a label containing `[` or `]`, or a
//! URL containing `(` or `)`, is not a match.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("image pattern is valid"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("link pattern is valid"));

/// One `[label](url)` occurrence in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SpanMatch<'a> {
    /// Byte range of the whole occurrence, including `!` for images
    pub range: Range<usize>,
    pub label: &'a str,
    pub url: &'a str,
}

/// Image occurrences in scan order
pub(crate) fn find_images(text: &str) -> Vec<SpanMatch<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(SpanMatch {
                range: whole.range(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Link occurrences in scan order, skipping any preceded by `!`.
///
/// A rejected occurrence only consumes its opening `[`, so a link starting
/// inside it is still found.
pub(crate) fn find_links(text: &str) -> Vec<SpanMatch<'_>> {
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };

        if text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }

        links.push(SpanMatch {
            range: whole.range(),
            label: label.as_str(),
            url: url.as_str(),
        });
        pos = whole.end();
    }

    links
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in the text
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Extract `(label, url)` pairs for every `[label](url)` that is not an image
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}
