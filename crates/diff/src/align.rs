//! Token alignment.
//!
//! Neither aligner searches for a shortest edit script. Character mode
//! resynchronizes along the diagonal after a mismatch; word mode walks both
//! sequences in lockstep and never resynchronizes.

use log::trace;

use crate::edit_op::EditKind;
use crate::options::DiffMode;

/// A single aligned token, addressed by index into its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignStep {
    Equal { old: usize, new: usize },
    Delete { old: usize },
    Insert { new: usize },
}

impl AlignStep {
    pub fn kind(&self) -> EditKind {
        match self {
            AlignStep::Equal { .. } => EditKind::Equal,
            AlignStep::Delete { .. } => EditKind::Delete,
            AlignStep::Insert { .. } => EditKind::Insert,
        }
    }
}

/// Align two token sequences with the algorithm for `mode`
pub fn align<T: PartialEq>(old: &[T], new: &[T], mode: DiffMode) -> Vec<AlignStep> {
    match mode {
        DiffMode::Character => align_chars(old, new),
        DiffMode::Word => align_words(old, new),
    }
}

/// Character alignment.
///
/// On a mismatch at `(i, j)` the diagonal is probed for the next offset `k`
/// where both sequences agree again. When one is found, the `k` tokens on
/// each side before it are emitted as a deletion run followed by an
/// insertion run, and both cursors move to the resynchronization point.
/// When the probe runs off the end of either sequence without agreement,
/// only `old[i]` is deleted and equality is re-checked from `(i + 1, j)`.
/// Tokens left over on one side after the other is exhausted are deleted or
/// inserted one by one.
///
/// Worst case is quadratic: a probe can scan the rest of the shorter
/// sequence for every deleted token.
pub fn align_chars<T: PartialEq>(old: &[T], new: &[T]) -> Vec<AlignStep> {
    let mut steps = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (0, 0);

    while i < old.len() || j < new.len() {
        match (old.get(i), new.get(j)) {
            (Some(a), Some(b)) if a == b => {
                steps.push(AlignStep::Equal { old: i, new: j });
                i += 1;
                j += 1;
            }
            (Some(_), Some(_)) => {
                let Some(k) = probe_diagonal(old, new, i, j) else {
                    steps.push(AlignStep::Delete { old: i });
                    i += 1;
                    continue;
                };

                let (sync_old, sync_new) = (i + k, j + k);
                trace!(
                    "mismatch at ({}, {}), resynchronizing at ({}, {})",
                    i,
                    j,
                    sync_old,
                    sync_new
                );

                // The probe moves both sides together, so the distances
                // always tie and the deletion run comes first.
                let deletes = (i..sync_old).map(|old| AlignStep::Delete { old });
                let inserts = (j..sync_new).map(|new| AlignStep::Insert { new });
                if sync_old - i <= sync_new - j {
                    steps.extend(deletes);
                    steps.extend(inserts);
                } else {
                    steps.extend(inserts);
                    steps.extend(deletes);
                }

                i = sync_old;
                j = sync_new;
            }
            (Some(_), None) => {
                steps.push(AlignStep::Delete { old: i });
                i += 1;
            }
            (None, Some(_)) => {
                steps.push(AlignStep::Insert { new: j });
                j += 1;
            }
            (None, None) => break,
        }
    }

    steps
}

/// Distance along the diagonal from a mismatch at `(i, j)` to the next
/// agreeing pair, or `None` if either sequence ends first.
fn probe_diagonal<T: PartialEq>(old: &[T], new: &[T], i: usize, j: usize) -> Option<usize> {
    let mut k = 1;
    while i + k < old.len() && j + k < new.len() {
        if old[i + k] == new[j + k] {
            return Some(k);
        }
        k += 1;
    }
    None
}

/// Word alignment.
///
/// Cursors advance in lockstep: equal pairs are kept, unequal pairs become
/// a deletion and an insertion. Once the sequences drift apart every later
/// pair is reported as changed, even where the words reappear.
pub fn align_words<T: PartialEq>(old: &[T], new: &[T]) -> Vec<AlignStep> {
    let mut steps = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);

    while i < old.len() || j < new.len() {
        match (old.get(i), new.get(j)) {
            (Some(a), Some(b)) => {
                if a == b {
                    steps.push(AlignStep::Equal { old: i, new: j });
                } else {
                    steps.push(AlignStep::Delete { old: i });
                    steps.push(AlignStep::Insert { new: j });
                }
                i += 1;
                j += 1;
            }
            (Some(_), None) => {
                steps.push(AlignStep::Delete { old: i });
                i += 1;
            }
            (None, Some(_)) => {
                steps.push(AlignStep::Insert { new: j });
                j += 1;
            }
            (None, None) => break,
        }
    }

    steps
}
