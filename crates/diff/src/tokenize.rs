//! Splitting a comparison view into tokens.

use std::ops::Range;

use crate::options::DiffMode;

/// An indivisible unit of comparison, borrowed from the normalized text.
///
/// Two tokens are equal when their text is equal; position plays no part.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range in the normalized text
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

/// Split `text` into tokens for the given mode.
///
/// Concatenating the token texts always reproduces `text` exactly.
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<Token<'_>> {
    match mode {
        DiffMode::Character => tokenize_chars(text),
        DiffMode::Word => tokenize_words(text),
    }
}

fn tokenize_chars(text: &str) -> Vec<Token<'_>> {
    text.char_indices()
        .map(|(idx, ch)| Token::new(&text[idx..idx + ch.len_utf8()], idx))
        .collect()
}

/// Maximal runs of whitespace and non-whitespace, each its own token
fn tokenize_words(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_is_space = None;

    for (idx, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match run_is_space {
            Some(current) if current != is_space => {
                tokens.push(Token::new(&text[run_start..idx], run_start));
                run_start = idx;
            }
            _ => {}
        }
        run_is_space = Some(is_space);
    }

    if run_start < text.len() {
        tokens.push(Token::new(&text[run_start..], run_start));
    }

    tokens
}
