//! Configuration for a single comparison.
//!
//! `Options` is passed explicitly into every call; the engine keeps no
//! ambient toggles between comparisons.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_result::DiffResult;

/// The unit of comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffMode {
    /// One token per character, aligned with a diagonal probe
    #[default]
    #[display(fmt = "character")]
    Character,

    /// Words and whitespace runs as tokens, aligned in lockstep
    #[display(fmt = "word")]
    Word,
}

impl FromStr for DiffMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" | "chars" => Ok(DiffMode::Character),
            "word" | "words" => Ok(DiffMode::Word),
            other => Err(anyhow!(
                "unknown diff mode `{}` (expected `character` or `word`)",
                other
            )),
        }
    }
}

/// Options controlling normalization and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Character or word alignment.
    pub mode: DiffMode,

    /// When false, characters are case-folded before comparison.
    pub case_sensitive: bool,

    /// When true, whitespace runs collapse to a single space and the
    /// ends are trimmed before comparison.
    pub ignore_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: DiffMode::Character,
            case_sensitive: true,
            ignore_whitespace: false,
        }
    }
}

impl Options {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison mode.
    pub fn mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether comparison is case sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set whether whitespace differences are ignored.
    pub fn ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    /// Whether the comparison view can differ from the original text.
    pub fn normalizes(&self) -> bool {
        !self.case_sensitive || self.ignore_whitespace
    }

    /// Compare two texts with these options.
    pub fn compare<'a>(&self, original: &'a str, modified: &'a str) -> DiffResult<'a> {
        crate::text_diff::compare(original, modified, self)
    }
}
