// crates/domain/src/edit.rs
use std::ops::Range;

use livecount_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::text::{CharCursor, char_len};

/// A contiguous replacement in the previous text, in character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    #[serde(alias = "startOffset", alias = "offset", alias = "rangeOffset")]
    pub start: usize,
    #[serde(default, alias = "removedLength", alias = "length", alias = "rangeLength")]
    pub removed_len: usize,
    #[serde(default, alias = "insertedText", alias = "text")]
    pub inserted: String,
}

impl TextEdit {
    pub fn new(start: usize, removed_len: usize, inserted: impl Into<String>) -> Self {
        Self { start, removed_len, inserted: inserted.into() }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at, 0, text)
    }

    pub fn delete(start: usize, len: usize) -> Self {
        Self::new(start, len, String::new())
    }

    /// Exclusive end offset in the previous text; saturates instead of wrapping.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.removed_len)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_noop(&self) -> bool {
        self.removed_len == 0 && self.inserted.is_empty()
    }

    fn check_bounds(&self, len: usize) -> DomainResult<()> {
        match self.start.checked_add(self.removed_len) {
            Some(end) if end <= len => Ok(()),
            _ => Err(DomainError::InvalidRange { start: self.start, end: self.end(), len }),
        }
    }
}

/// Validate a batch against a previous text of `len` characters and put it in processing order.
///
/// Edits are sorted by position (stable, insertions before replacements at the same offset).
/// Edits that touch (`next.start == previous.end`) are merged into one, since each would
/// otherwise take the other's replaced text as its boundary character.
///
/// # Errors
///
/// - [`DomainError::InvalidRange`] if an edit reaches past the text
/// - [`DomainError::OverlappingEdits`] if two removed spans overlap
pub fn normalize_batch(edits: &[TextEdit], len: usize) -> DomainResult<Vec<TextEdit>> {
    for edit in edits {
        edit.check_bounds(len)?;
    }

    let mut sorted = edits.to_vec();
    sorted.sort_by_key(|edit| (edit.start, edit.end()));

    let mut merged: Vec<TextEdit> = Vec::with_capacity(sorted.len());
    for edit in sorted {
        if let Some(last) = merged.last_mut() {
            let previous_end = last.end();
            if edit.start < previous_end {
                return Err(DomainError::OverlappingEdits { previous_end, next_start: edit.start });
            }
            if edit.start == previous_end {
                last.removed_len += edit.removed_len;
                last.inserted.push_str(&edit.inserted);
                continue;
            }
        }
        merged.push(edit);
    }
    merged.retain(|edit| !edit.is_noop());
    Ok(merged)
}

/// Produce the text that results from applying `edits` to `text`.
///
/// Hosts normally hand over the resulting text themselves; this is for adapters that only
/// receive the edits.
///
/// # Errors
///
/// Same as [`normalize_batch`].
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> DomainResult<String> {
    let len = char_len(text);
    let batch = normalize_batch(edits, len)?;

    let mut cursor = CharCursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for edit in &batch {
        let invalid = || DomainError::InvalidRange { start: edit.start, end: edit.end(), len };
        let start = cursor.byte_offset(edit.start).ok_or_else(invalid)?;
        let end = cursor.byte_offset(edit.end()).ok_or_else(invalid)?;
        out.push_str(&text[copied..start]);
        out.push_str(&edit.inserted);
        copied = end;
    }
    out.push_str(&text[copied..]);
    Ok(out)
}
