//! Span splitting passes.
//!
//! Every pass consumes a span sequence and returns a new one. Only plain spans
//! are rewritten; typed spans pass through in place.

use super::extract::{find_images, find_links, SpanMatch};
use super::span::{Span, Style};
use crate::{MarkdownError, Result};

/// Split plain spans on a paired delimiter.
///
/// Pieces at even positions stay plain, pieces at odd positions take `style`.
/// Empty pieces are kept so the sequence preserves order. An odd number of
/// delimiters in one span is an [`MarkdownError::UnmatchedDelimiter`].
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, style: Style) -> Result<Vec<Span>> {
    spans.into_iter().try_fold(Vec::new(), |mut out, span| {
        match span {
            Span::Plain(text) if text.contains(delimiter) => {
                if text.matches(delimiter).count() % 2 == 1 {
                    return Err(MarkdownError::UnmatchedDelimiter {
                        delimiter: delimiter.to_string(),
                        text,
                    });
                }
                out.extend(text.split(delimiter).enumerate().map(|(i, part)| {
                    if i % 2 == 0 {
                        Span::plain(part)
                    } else {
                        style.span(part)
                    }
                }));
            }
            other => out.push(other),
        }
        Ok(out)
    })
}

/// Replace `![alt](url)` occurrences in plain spans with image spans
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_images, |alt, url| Span::image(alt, url))
}

/// Replace `[label](url)` occurrences in plain spans with link spans
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_links, |text, url| Span::link(text, url))
}

fn split_matches<F, B>(spans: Vec<Span>, find: F, build: B) -> Vec<Span>
where
    F: for<'a> Fn(&'a str) -> Vec<SpanMatch<'a>>,
    B: Fn(&str, &str) -> Span,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let matches = find(&text);
        if matches.is_empty() {
            out.push(Span::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            if m.range.start > cursor {
                out.push(Span::plain(&text[cursor..m.range.start]));
            }
            out.push(build(m.label, m.url));
            cursor = m.range.end;
        }
        if cursor < text.len() {
            out.push(Span::plain(&text[cursor..]));
        }
    }

    out
}
