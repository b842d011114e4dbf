// crates/domain/src/engine.rs
use livecount_shared_kernel::{ByteCount, CharCount, LineCount, Statistic, WordCount};

use crate::{classification::ClassificationRules, encoding::ByteEncoder};

/// Word segmentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    InWhitespace,
    InWord,
}

/// Count characters, bytes, words and lines in `text`.
///
/// - characters are Unicode scalar values
/// - bytes are only measured when `encoder` is given, over the whole string
/// - every character matching the newline rule is one line
/// - a word is a maximal run of characters not matching the whitespace rule
#[must_use]
pub fn compute_statistic(
    text: &str,
    rules: &ClassificationRules,
    encoder: Option<&dyn ByteEncoder>,
) -> Statistic {
    let mut characters = 0usize;
    let mut words = 0usize;
    let mut lines = 0usize;
    let mut state = WordState::InWhitespace;

    for ch in text.chars() {
        if rules.is_whitespace(ch) {
            if state == WordState::InWord {
                words += 1;
                state = WordState::InWhitespace;
            }
        } else {
            state = WordState::InWord;
        }

        if rules.is_newline(ch) {
            lines += 1;
        }
        characters += 1;
    }

    // the last word has no trailing whitespace to close it
    if state == WordState::InWord {
        words += 1;
    }

    let bytes = encoder.map_or(0, |encoder| encoder.encoded_len(text));

    Statistic {
        characters: CharCount::new(characters),
        bytes: ByteCount::new(bytes),
        words: WordCount::new(words),
        lines: LineCount::new(lines),
    }
}
