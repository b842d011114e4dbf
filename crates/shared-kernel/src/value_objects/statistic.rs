// crates/shared-kernel/src/value_objects/statistic.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

use super::counts::{ByteCount, CharCount, LineCount, WordCount};

/// Aggregate counts for a span of text.
///
/// `bytes` is only populated when a byte encoder is configured and stays zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Statistic {
    pub characters: CharCount,
    pub bytes: ByteCount,
    pub words: WordCount,
    pub lines: LineCount,
}

impl Statistic {
    pub const ZERO: Self = Self {
        characters: CharCount::ZERO,
        bytes: ByteCount::ZERO,
        words: WordCount::ZERO,
        lines: LineCount::ZERO,
    };

    #[inline]
    pub const fn new(characters: usize, bytes: usize, words: usize, lines: usize) -> Self {
        Self {
            characters: CharCount::new(characters),
            bytes: ByteCount::new(bytes),
            words: WordCount::new(words),
            lines: LineCount::new(lines),
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.characters.is_zero() && self.bytes.is_zero() && self.words.is_zero() && self.lines.is_zero()
    }

    /// Applies a signed delta, returning `None` if any component would drop below zero.
    pub fn checked_apply(self, delta: StatisticDelta) -> Option<Self> {
        Some(Self {
            characters: self.characters.checked_add_signed(delta.characters)?,
            bytes: self.bytes.checked_add_signed(delta.bytes)?,
            words: self.words.checked_add_signed(delta.words)?,
            lines: self.lines.checked_add_signed(delta.lines)?,
        })
    }
}

impl Add for Statistic {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            characters: self.characters + rhs.characters,
            bytes: self.bytes + rhs.bytes,
            words: self.words + rhs.words,
            lines: self.lines + rhs.lines,
        }
    }
}

impl AddAssign for Statistic {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Statistic {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Statistic> for Statistic {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chars={} bytes={} words={} lines={}",
            self.characters, self.bytes, self.words, self.lines
        )
    }
}

/// Signed, component-wise difference between two statistics.
///
/// Deltas accumulate freely (components may go negative while a batch is being folded in);
/// only the final [`Statistic::checked_apply`] enforces non-negativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticDelta {
    pub characters: isize,
    pub bytes: isize,
    pub words: isize,
    pub lines: isize,
}

impl StatisticDelta {
    /// Delta that turns `removed` into `inserted`.
    pub fn between(removed: &Statistic, inserted: &Statistic) -> Self {
        Self {
            characters: inserted.characters.signed_diff(removed.characters),
            bytes: inserted.bytes.signed_diff(removed.bytes),
            words: inserted.words.signed_diff(removed.words),
            lines: inserted.lines.signed_diff(removed.lines),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.characters == 0 && self.bytes == 0 && self.words == 0 && self.lines == 0
    }
}

impl Add for StatisticDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            characters: self.characters.saturating_add(rhs.characters),
            bytes: self.bytes.saturating_add(rhs.bytes),
            words: self.words.saturating_add(rhs.words),
            lines: self.lines.saturating_add(rhs.lines),
        }
    }
}

impl AddAssign for StatisticDelta {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
