// crates/domain/src/display.rs
use std::fmt;

use livecount_shared_kernel::Statistic;
use serde::Serialize;

use crate::config::{Config, CountMode};

/// `(lines, words, size)` where `size` is characters or bytes depending on the count mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayStatistic {
    pub lines: usize,
    pub words: usize,
    pub size: usize,
}

impl DisplayStatistic {
    pub fn from_statistic(stat: &Statistic, mode: CountMode) -> Self {
        let size = match mode {
            CountMode::Character => stat.characters.value(),
            CountMode::Byte => stat.bytes.value(),
        };
        Self { lines: stat.lines.value(), words: stat.words.value(), size }
    }
}

impl fmt::Display for DisplayStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} | {} | {} )", self.lines, self.words, self.size)
    }
}

/// Summed statistic over every selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionStatistic {
    #[serde(flatten)]
    pub statistic: DisplayStatistic,
    pub selections: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentDisplay {
    /// Document statistics are toggled off.
    Disabled,
    Shown(DisplayStatistic),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDisplay {
    /// Nothing to show: no character selected.
    Hidden,
    /// Selection statistics are toggled off while something is selected.
    Disabled,
    Shown(SelectionStatistic),
}

/// Which statistics the display sink should render. Toggling never touches cached state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    pub document: bool,
    pub selection: bool,
}

impl DisplayToggles {
    pub const fn new(document: bool, selection: bool) -> Self {
        Self { document, selection }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_document_toggle, config.default_selection_toggle)
    }

    /// Flip the document toggle, returning the new state.
    pub fn toggle_document(&mut self) -> bool {
        self.document = !self.document;
        self.document
    }

    /// Flip the selection toggle, returning the new state.
    pub fn toggle_selection(&mut self) -> bool {
        self.selection = !self.selection;
        self.selection
    }
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self::new(true, true)
    }
}
