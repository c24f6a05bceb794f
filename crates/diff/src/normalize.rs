//! Comparison view of an input text.

use crate::offset_map::OffsetMap;
use crate::options::Options;

/// A normalized text together with its offset table back to the original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    text: String,
    offsets: OffsetMap,
}

impl Normalized {
    /// The comparison view
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The offset table from the comparison view to the original
    pub fn offsets(&self) -> &OffsetMap {
        &self.offsets
    }
}

/// Fold a char for case-insensitive comparison.
///
/// Always one char in, one char out, so offsets stay per-char.
pub fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Build the comparison view of `text`.
///
/// Case folding applies first, then whitespace collapsing; each is
/// controlled independently by `options`. The original is never modified.
pub fn normalize(text: &str, options: &Options) -> Normalized {
    let mut normalized = String::with_capacity(text.len());
    let mut offsets = OffsetMap::new(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let ch = if options.case_sensitive {
            ch
        } else {
            fold_case(ch)
        };

        if options.ignore_whitespace && ch.is_whitespace() {
            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            // Leading and trailing runs are trimmed; `finish` hands their
            // bytes to the neighbouring segment.
            let leading = offsets.is_empty();
            let trailing = end == text.len();
            if !leading && !trailing {
                normalized.push(' ');
                offsets.push(1, start..end);
            }
            continue;
        }

        normalized.push(ch);
        offsets.push(ch.len_utf8(), start..start + ch.len_utf8());
    }

    Normalized {
        text: normalized,
        offsets: offsets.finish(),
    }
}
