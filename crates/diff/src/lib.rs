// Text comparison engine
// This crate aligns two texts by character or by word and classifies every
// run as equal, deleted or inserted, with spans into the original texts

mod align;
mod diff_result;
mod edit_op;
mod normalize;
mod offset_map;
mod options;
mod text_diff;
mod tokenize;

pub use align::{align, align_chars, align_words, AlignStep};
pub use diff_result::{map_to_original, Change, DiffResult, DiffStats, LineCol, OpLocation, SideView};
pub use edit_op::{EditKind, EditOp, Span};
pub use normalize::{fold_case, normalize, Normalized};
pub use offset_map::OffsetMap;
pub use options::{DiffMode, Options};
pub use text_diff::{compare, TextDiff};
pub use tokenize::{tokenize, Token};
