use log::debug;

use crate::align::align;
use crate::diff_result::{map_to_original, DiffResult, SideView};
use crate::normalize::normalize;
use crate::options::{DiffMode, Options};
use crate::tokenize::tokenize;

/// Compare two texts.
///
/// Every unit of both texts ends up in exactly one operation of the result.
/// The comparison is synchronous and runs to completion; callers that feed
/// very large inputs should move it off latency-sensitive threads.
pub fn compare<'a>(original: &'a str, modified: &'a str, options: &Options) -> DiffResult<'a> {
    let old_view = normalize(original, options);
    let new_view = normalize(modified, options);

    let old_tokens = tokenize(old_view.text(), options.mode);
    let new_tokens = tokenize(new_view.text(), options.mode);

    let steps = align(&old_tokens, &new_tokens, options.mode);

    let result = map_to_original(
        &steps,
        SideView {
            original,
            normalized: &old_view,
            tokens: &old_tokens,
        },
        SideView {
            original: modified,
            normalized: &new_view,
            tokens: &new_tokens,
        },
    );

    debug!(
        "compared {} vs {} {} tokens: {} steps, {} ops",
        old_tokens.len(),
        new_tokens.len(),
        options.mode,
        steps.len(),
        result.len()
    );

    result
}

/// Convenience entry points over [`compare`]
pub struct TextDiff;

impl TextDiff {
    /// Create a character diff between two texts with default options
    pub fn diff<'a>(old_text: &'a str, new_text: &'a str) -> DiffResult<'a> {
        compare(old_text, new_text, &Options::default())
    }

    /// Create a diff between two texts in the given mode
    pub fn diff_with_mode<'a>(old_text: &'a str, new_text: &'a str, mode: DiffMode) -> DiffResult<'a> {
        compare(old_text, new_text, &Options::default().mode(mode))
    }

    /// Start configuring a comparison
    pub fn configure() -> Options {
        Options::default()
    }

    /// Generate inline markup (`[-old-]{+new+}`) for two texts
    pub fn inline_diff(old_text: &str, new_text: &str, options: &Options) -> String {
        compare(old_text, new_text, options).to_inline_markup()
    }

    /// Generate a unified listing, one operation per line
    pub fn unified_diff(old_text: &str, new_text: &str, options: &Options) -> String {
        compare(old_text, new_text, options).to_unified_string()
    }
}
