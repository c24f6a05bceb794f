use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a run of text in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EditKind {
    /// Present in both texts
    #[display(fmt = "equal")]
    Equal,

    /// Present only in the original text
    #[display(fmt = "delete")]
    Delete,

    /// Present only in the modified text
    #[display(fmt = "insert")]
    Insert,
}

impl EditKind {
    /// Sign used in unified output
    pub fn sign(&self) -> char {
        match self {
            EditKind::Equal => ' ',
            EditKind::Delete => '-',
            EditKind::Insert => '+',
        }
    }
}

impl From<similar::ChangeTag> for EditKind {
    fn from(tag: similar::ChangeTag) -> Self {
        match tag {
            similar::ChangeTag::Equal => EditKind::Equal,
            similar::ChangeTag::Delete => EditKind::Delete,
            similar::ChangeTag::Insert => EditKind::Insert,
        }
    }
}

impl From<EditKind> for similar::ChangeTag {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Equal => similar::ChangeTag::Equal,
            EditKind::Delete => similar::ChangeTag::Delete,
            EditKind::Insert => similar::ChangeTag::Insert,
        }
    }
}

/// A contiguous byte range of an original (non-normalized) text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// The starting byte offset
    pub start: usize,

    /// The length in bytes
    pub len: usize,
}

impl Span {
    /// Create a new span from start and length
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create a span from a start and end (exclusive)
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            len: range.end - range.start,
        }
    }

    /// Convert to a standard Range
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Get the end of the span (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if this span contains the given byte offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// The text this span covers in `source`
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.to_range()]
    }

    /// Extend this span by one that starts where it ends
    fn absorb(&mut self, next: Span) -> bool {
        if next.start != self.end() {
            return false;
        }
        self.len += next.len;
        true
    }
}

/// One classified run of a diff.
///
/// `Equal` keeps both sides: under case folding or whitespace collapsing
/// the matched original substrings need not be identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum EditOp {
    Equal { old: Span, new: Span },
    Delete { old: Span },
    Insert { new: Span },
}

impl EditOp {
    pub fn kind(&self) -> EditKind {
        match self {
            EditOp::Equal { .. } => EditKind::Equal,
            EditOp::Delete { .. } => EditKind::Delete,
            EditOp::Insert { .. } => EditKind::Insert,
        }
    }

    /// The span in the original text, if this op covers any of it
    pub fn old_span(&self) -> Option<Span> {
        match *self {
            EditOp::Equal { old, .. } | EditOp::Delete { old } => Some(old),
            EditOp::Insert { .. } => None,
        }
    }

    /// The span in the modified text, if this op covers any of it
    pub fn new_span(&self) -> Option<Span> {
        match *self {
            EditOp::Equal { new, .. } | EditOp::Insert { new } => Some(new),
            EditOp::Delete { .. } => None,
        }
    }

    /// Whether this op changes anything
    pub fn is_change(&self) -> bool {
        self.kind() != EditKind::Equal
    }

    /// Merge `next` into this op when both are the same kind and adjacent on
    /// every side they cover. Returns false if nothing was merged.
    pub fn merge(&mut self, next: &EditOp) -> bool {
        match (self, next) {
            (EditOp::Equal { old, new }, EditOp::Equal { old: next_old, new: next_new }) => {
                if old.end() != next_old.start || new.end() != next_new.start {
                    return false;
                }
                old.absorb(*next_old) && new.absorb(*next_new)
            }
            (EditOp::Delete { old }, EditOp::Delete { old: next_old }) => old.absorb(*next_old),
            (EditOp::Insert { new }, EditOp::Insert { new: next_new }) => new.absorb(*next_new),
            _ => false,
        }
    }
}
