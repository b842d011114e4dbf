// crates/domain/src/text.rs
//! Character-offset helpers.
//!
//! Hosts address text in Unicode scalar values while Rust strings are indexed by byte,
//! so every slice goes through a translation step here.

use std::ops::Range;

use livecount_shared_kernel::{DomainError, DomainResult};

/// Number of Unicode scalar values in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Borrow the characters `range` of `text`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRange`] when the range is reversed or extends past the text.
pub fn char_slice(text: &str, range: Range<usize>) -> DomainResult<&str> {
    let invalid = || DomainError::InvalidRange { start: range.start, end: range.end, len: char_len(text) };
    if range.start > range.end {
        return Err(invalid());
    }
    let mut cursor = CharCursor::new(text);
    let start = cursor.byte_offset(range.start).ok_or_else(invalid)?;
    let end = cursor.byte_offset(range.end).ok_or_else(invalid)?;
    Ok(&text[start..end])
}

/// Translates character offsets into byte offsets, remembering its position so that
/// ascending lookups over one text walk it only once.
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    text: &'a str,
    chars: usize,
    bytes: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, chars: 0, bytes: 0 }
    }

    /// Byte offset of character `offset`; `offset == len` maps to `text.len()`.
    ///
    /// Returns `None` when `offset` lies beyond the end of the text. Seeking backwards
    /// restarts from the beginning.
    pub fn byte_offset(&mut self, offset: usize) -> Option<usize> {
        if offset < self.chars {
            self.chars = 0;
            self.bytes = 0;
        }
        let text = self.text;
        let mut rest = text[self.bytes..].chars();
        while self.chars < offset {
            let ch = rest.next()?;
            self.bytes += ch.len_utf8();
            self.chars += 1;
        }
        Some(self.bytes)
    }

    /// The character immediately before byte offset `at`.
    pub fn char_before(&self, at: usize) -> Option<char> {
        self.text[..at].chars().next_back()
    }

    /// The character starting at byte offset `at`.
    pub fn char_at(&self, at: usize) -> Option<char> {
        self.text[at..].chars().next()
    }
}
