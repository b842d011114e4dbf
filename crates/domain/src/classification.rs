// crates/domain/src/classification.rs
use std::fmt;

use livecount_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

/// Pattern used for whitespace when the user has not configured one.
pub const DEFAULT_WHITESPACE_PATTERN: &str = r"\s";
/// Pattern used for newlines when the user has not configured one.
pub const DEFAULT_NEWLINE_PATTERN: &str = r"\n";

const ASCII_LEN: usize = 128;

/// Predicate over a single character.
///
/// A class is either a regular expression tested (unanchored) against the one-character
/// string, or a plain function. Results for ASCII are tabulated up front.
#[derive(Clone)]
pub struct CharClass {
    source: ClassSource,
    ascii: [bool; ASCII_LEN],
}

#[derive(Clone)]
enum ClassSource {
    Pattern(Regex),
    Predicate { name: &'static str, test: fn(char) -> bool },
}

impl ClassSource {
    fn test(&self, ch: char) -> bool {
        match self {
            Self::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(ch.encode_utf8(&mut buf))
            }
            Self::Predicate { test, .. } => test(ch),
        }
    }
}

impl CharClass {
    /// Compile `pattern` into a character class.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] if the regular expression does not compile.
    pub fn pattern(pattern: &str) -> DomainResult<Self> {
        let regex = Regex::new(pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self::from_source(ClassSource::Pattern(regex)))
    }

    /// Wrap a side-effect-free predicate; `name` is what [`CharClass::describe`] reports.
    pub fn predicate(name: &'static str, test: fn(char) -> bool) -> Self {
        Self::from_source(ClassSource::Predicate { name, test })
    }

    fn from_source(source: ClassSource) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let ascii = std::array::from_fn(|i| source.test(char::from(i as u8)));
        Self { source, ascii }
    }

    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.source.test(ch)
        }
    }

    /// The pattern text or predicate name this class was built from.
    pub fn describe(&self) -> &str {
        match &self.source {
            ClassSource::Pattern(regex) => regex.as_str(),
            ClassSource::Predicate { name, .. } => name,
        }
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharClass").field(&self.describe()).finish()
    }
}

/// Whitespace and newline predicates used to segment text.
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    whitespace: CharClass,
    newline: CharClass,
}

impl ClassificationRules {
    pub fn new(whitespace: CharClass, newline: CharClass) -> Self {
        Self { whitespace, newline }
    }

    /// Compile both patterns.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] for the first pattern that fails to compile.
    pub fn from_patterns(whitespace: &str, newline: &str) -> DomainResult<Self> {
        Ok(Self::new(CharClass::pattern(whitespace)?, CharClass::pattern(newline)?))
    }

    #[inline]
    pub fn is_whitespace(&self, ch: char) -> bool {
        self.whitespace.matches(ch)
    }

    #[inline]
    pub fn is_newline(&self, ch: char) -> bool {
        self.newline.matches(ch)
    }

    pub fn whitespace(&self) -> &CharClass {
        &self.whitespace
    }

    pub fn newline(&self) -> &CharClass {
        &self.newline
    }
}

impl Default for ClassificationRules {
    /// Unicode whitespace and `'\n'`, equivalent to the default patterns.
    fn default() -> Self {
        Self::new(
            CharClass::predicate(DEFAULT_WHITESPACE_PATTERN, char::is_whitespace),
            CharClass::predicate(DEFAULT_NEWLINE_PATTERN, |ch| ch == '\n'),
        )
    }
}
