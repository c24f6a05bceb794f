//! Offset table between a normalized comparison view and its original text.
//!
//! Every char of the normalized text owns one segment: the byte range of
//! the original it stands for. Segments tile the original without gaps, so
//! any run of normalized chars projects onto one contiguous original slice.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    /// Byte offset of the char in the normalized text
    normalized_start: usize,

    /// Bytes of the original text this char stands for
    original: Range<usize>,
}

/// Maps byte offsets of a normalized text back onto its original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    segments: Vec<Segment>,
    normalized_len: usize,
    original_len: usize,
}

impl OffsetMap {
    /// Create an empty map for an original of `original_len` bytes
    pub fn new(original_len: usize) -> Self {
        Self {
            segments: Vec::new(),
            normalized_len: 0,
            original_len,
        }
    }

    /// Create a map where the normalized text is the original itself
    pub fn identity(text: &str) -> Self {
        let mut map = Self::new(text.len());
        for (idx, ch) in text.char_indices() {
            map.push(ch.len_utf8(), idx..idx + ch.len_utf8());
        }
        map.finish()
    }

    /// Append the next normalized char, `normalized_len` bytes long, standing
    /// for `original` in the source text
    pub fn push(&mut self, normalized_len: usize, original: Range<usize>) {
        debug_assert!(
            self.segments
                .last()
                .map_or(true, |last| last.original.end <= original.start),
            "segments must be pushed in original order"
        );

        self.segments.push(Segment {
            normalized_start: self.normalized_len,
            original,
        });
        self.normalized_len += normalized_len;
    }

    /// Close the table: the first segment absorbs any original bytes before
    /// it and the last segment absorbs any bytes after it (trimmed
    /// whitespace).
    pub fn finish(mut self) -> Self {
        let original_len = self.original_len;
        if let Some(first) = self.segments.first_mut() {
            first.original.start = 0;
        }
        if let Some(last) = self.segments.last_mut() {
            last.original.end = original_len;
        }
        self
    }

    /// Number of normalized chars
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the normalized text is empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of the normalized text in bytes
    pub fn normalized_len(&self) -> usize {
        self.normalized_len
    }

    /// Length of the original text in bytes
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Original bytes not covered by any segment.
    ///
    /// Only non-empty when normalization removed everything, e.g. a
    /// whitespace-only input with whitespace ignored.
    pub fn residue(&self) -> Option<Range<usize>> {
        if self.segments.is_empty() && self.original_len > 0 {
            Some(0..self.original_len)
        } else {
            None
        }
    }

    /// Project a normalized byte offset onto the original.
    ///
    /// Offsets at or past the end map to the end of the original.
    pub fn original_offset(&self, normalized: usize) -> usize {
        let idx = self
            .segments
            .partition_point(|segment| segment.normalized_start < normalized);
        match self.segments.get(idx) {
            Some(segment) => segment.original.start,
            None => self.original_len,
        }
    }

    /// Project a normalized byte range onto the original
    pub fn to_original(&self, normalized: Range<usize>) -> Range<usize> {
        self.original_offset(normalized.start)..self.original_offset(normalized.end)
    }

    /// Offset of the normalized char covering the given original byte
    pub fn to_normalized(&self, original: usize) -> usize {
        let idx = self
            .segments
            .partition_point(|segment| segment.original.end <= original);
        match self.segments.get(idx) {
            Some(segment) => segment.normalized_start,
            None => self.normalized_len,
        }
    }
}
