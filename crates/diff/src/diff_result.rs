use ropey::Rope;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::align::AlignStep;
use crate::edit_op::{EditKind, EditOp, Span};
use crate::normalize::Normalized;
use crate::tokenize::Token;

/// The result of comparing two texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult<'a> {
    /// The original text
    old: &'a str,

    /// The modified text
    new: &'a str,

    /// Coalesced edit operations, in order
    ops: Vec<EditOp>,
}

/// One renderable run of a diff, borrowed from the compared texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change<'a> {
    /// The kind of change
    pub kind: EditKind,

    /// Text from the original (equal and delete)
    pub old: Option<&'a str>,

    /// Text from the modified text (equal and insert)
    pub new: Option<&'a str>,
}

/// Totals over a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    /// Number of equal operations
    pub equal_ops: usize,

    /// Number of delete operations
    pub delete_ops: usize,

    /// Number of insert operations
    pub insert_ops: usize,

    /// Bytes of the original covered by equal operations
    pub equal_bytes: usize,

    /// Bytes of the original that were deleted
    pub deleted_bytes: usize,

    /// Bytes of the modified text that were inserted
    pub inserted_bytes: usize,
}

/// A zero-based line and column (in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

/// Where an operation starts in each text it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpLocation {
    pub old: Option<LineCol>,
    pub new: Option<LineCol>,
}

/// One side of a comparison as seen by the span mapper
#[derive(Debug, Clone, Copy)]
pub struct SideView<'a, 't> {
    /// The text as the caller passed it
    pub original: &'a str,

    /// Its comparison view
    pub normalized: &'t Normalized,

    /// Tokens of the comparison view
    pub tokens: &'t [Token<'t>],
}

impl<'t> SideView<'_, 't> {
    fn span(&self, token: usize) -> Span {
        let range = self.tokens[token].range();
        Span::from_range(self.normalized.offsets().to_original(range))
    }

    fn residue(&self) -> Option<Span> {
        self.normalized.offsets().residue().map(Span::from_range)
    }
}

/// Translate aligned tokens into coalesced operations over the original
/// texts.
///
/// Token spans are projected through each side's offset table, so the ops
/// cover the original bytes, including whitespace that normalization
/// collapsed or trimmed. An input whose comparison view is empty (only
/// ignored whitespace) is emitted as a leading `Equal`.
pub fn map_to_original<'a>(
    steps: &[AlignStep],
    old: SideView<'a, '_>,
    new: SideView<'a, '_>,
) -> DiffResult<'a> {
    let mut ops: Vec<EditOp> = Vec::new();

    let (old_residue, new_residue) = (old.residue(), new.residue());
    if old_residue.is_some() || new_residue.is_some() {
        ops.push(EditOp::Equal {
            old: old_residue.unwrap_or_default(),
            new: new_residue.unwrap_or_default(),
        });
    }

    for step in steps {
        let op = match *step {
            AlignStep::Equal { old: i, new: j } => EditOp::Equal {
                old: old.span(i),
                new: new.span(j),
            },
            AlignStep::Delete { old: i } => EditOp::Delete { old: old.span(i) },
            AlignStep::Insert { new: j } => EditOp::Insert { new: new.span(j) },
        };

        let merged = match ops.last_mut() {
            Some(last) => last.merge(&op),
            None => false,
        };
        if !merged {
            ops.push(op);
        }
    }

    DiffResult {
        old: old.original,
        new: new.original,
        ops,
    }
}

impl<'a> DiffResult<'a> {
    /// Get the original text
    pub fn original(&self) -> &'a str {
        self.old
    }

    /// Get the modified text
    pub fn modified(&self) -> &'a str {
        self.new
    }

    /// Get the operations
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Get the number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether there are no operations (both texts empty)
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Resolve an operation to its text
    pub fn change(&self, op: &EditOp) -> Change<'a> {
        Change {
            kind: op.kind(),
            old: op.old_span().map(|span| span.slice(self.old)),
            new: op.new_span().map(|span| span.slice(self.new)),
        }
    }

    /// Iterate over the operations as text
    pub fn changes(&self) -> impl Iterator<Item = Change<'a>> + '_ {
        self.ops.iter().map(move |op| self.change(op))
    }

    /// Check if the texts differ under the options used
    pub fn has_changes(&self) -> bool {
        self.ops.iter().any(EditOp::is_change)
    }

    /// Concatenate equal and deleted text; always the original text
    pub fn reconstruct_old(&self) -> String {
        self.changes().filter_map(|change| change.old).collect()
    }

    /// Concatenate equal and inserted text; always the modified text
    pub fn reconstruct_new(&self) -> String {
        self.changes().filter_map(|change| change.new).collect()
    }

    /// Get totals over the operations
    pub fn stats(&self) -> DiffStats {
        self.ops
            .iter()
            .fold(DiffStats::default(), |mut stats, op| {
                match *op {
                    EditOp::Equal { old, .. } => {
                        stats.equal_ops += 1;
                        stats.equal_bytes += old.len;
                    }
                    EditOp::Delete { old } => {
                        stats.delete_ops += 1;
                        stats.deleted_bytes += old.len;
                    }
                    EditOp::Insert { new } => {
                        stats.insert_ops += 1;
                        stats.inserted_bytes += new.len;
                    }
                }
                stats
            })
    }

    /// Share of the longer text that compared equal, from 0.0 to 1.0
    pub fn similarity(&self) -> f64 {
        self.stats().similarity(self.old.len(), self.new.len())
    }

    /// Where each operation starts, as line and column in each text
    pub fn locations(&self) -> Vec<OpLocation> {
        let old_rope = Rope::from_str(self.old);
        let new_rope = Rope::from_str(self.new);

        self.ops
            .iter()
            .map(|op| OpLocation {
                old: op.old_span().map(|span| line_col(&old_rope, span.start)),
                new: op.new_span().map(|span| line_col(&new_rope, span.start)),
            })
            .collect()
    }

    /// Render as inline markup: `[-removed-]` and `{+added+}` around
    /// changes, equal text as in the original
    pub fn to_inline_markup(&self) -> String {
        let mut result = String::with_capacity(self.old.len() + self.new.len());

        for change in self.changes() {
            match change.kind {
                EditKind::Equal => result.push_str(change.text()),
                EditKind::Delete => {
                    result.push_str("[-");
                    result.push_str(change.text());
                    result.push_str("-]");
                }
                EditKind::Insert => {
                    result.push_str("{+");
                    result.push_str(change.text());
                    result.push_str("+}");
                }
            }
        }

        result
    }

    /// Render one operation per line, prefixed with ` `, `-` or `+`
    pub fn to_unified_string(&self) -> String {
        let mut result = String::new();

        for change in self.changes() {
            result.push(change.kind.sign());
            result.push_str(change.text());
            if !change.text().ends_with('\n') {
                result.push('\n');
            }
        }

        result
    }
}

fn line_col(rope: &Rope, byte: usize) -> LineCol {
    let char_idx = rope.byte_to_char(byte);
    let line = rope.char_to_line(char_idx);
    LineCol {
        line,
        column: char_idx - rope.line_to_char(line),
    }
}

impl<'a> Change<'a> {
    /// The text to show: original side for equal and delete, modified side
    /// for insert or when the original side of an equal run is empty
    pub fn text(&self) -> &'a str {
        match self.old {
            Some(old) if !old.is_empty() => old,
            _ => self.new.unwrap_or_default(),
        }
    }

    /// The modified side, where present
    pub fn new_text(&self) -> Option<&'a str> {
        self.new
    }
}

impl DiffStats {
    /// Share of the longer text (in original bytes) that matched.
    ///
    /// Two empty texts are fully similar.
    pub fn similarity(&self, old_len: usize, new_len: usize) -> f64 {
        let longest = old_len.max(new_len);
        if longest == 0 {
            return 1.0;
        }
        self.equal_bytes.min(longest) as f64 / longest as f64
    }

    /// Whether any bytes were deleted or inserted
    pub fn has_changes(&self) -> bool {
        self.delete_ops > 0 || self.insert_ops > 0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Change<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let paired = self.kind == EditKind::Equal && self.old != self.new;
        let mut state = serializer.serialize_struct("Change", if paired { 3 } else { 2 })?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("text", self.text())?;
        if paired {
            state.serialize_field("newText", &self.new)?;
        }
        state.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for DiffResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ops.len()))?;
        for change in self.changes() {
            seq.serialize_element(&change)?;
        }
        seq.end()
    }
}
