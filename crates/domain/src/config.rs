// crates/domain/src/config.rs
use std::{fmt, str::FromStr, sync::Arc};

use derive_builder::Builder;
use livecount_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::{
    classification::{ClassificationRules, DEFAULT_NEWLINE_PATTERN, DEFAULT_WHITESPACE_PATTERN},
    encoding::{ByteEncoder, Encoding},
};

/// What the `size` column reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    #[default]
    Character,
    Byte,
}

impl CountMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Byte => "byte",
        }
    }
}

impl FromStr for CountMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" | "chars" => Ok(Self::Character),
            "byte" | "bytes" => Ok(Self::Byte),
            other => Err(format!("Unexpected character count mode: {other}")),
        }
    }
}

impl fmt::Display for CountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the self-check finds the incremental statistic has drifted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairPolicy {
    /// Replace the cached statistic with the fresh recomputation.
    #[default]
    Recompute,
    /// Report only; the drifted statistic stays cached.
    Keep,
}

/// Raw, user-facing options. Every field is optional so that layers (defaults, settings
/// file, command line) can be merged before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOptions {
    pub white_space: Option<String>,
    pub new_line: Option<String>,
    pub character_count: Option<String>,
    pub encoding: Option<String>,
    pub debug: Option<bool>,
    pub repair_on_mismatch: Option<bool>,
    pub default_selection_toggle: Option<bool>,
    pub default_document_toggle: Option<bool>,
}

impl ConfigOptions {
    /// Options carrying the default patterns and nothing else.
    pub fn with_defaults() -> Self {
        Self {
            white_space: Some(DEFAULT_WHITESPACE_PATTERN.to_string()),
            new_line: Some(DEFAULT_NEWLINE_PATTERN.to_string()),
            ..Self::default()
        }
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            white_space: overrides.white_space.or(self.white_space),
            new_line: overrides.new_line.or(self.new_line),
            character_count: overrides.character_count.or(self.character_count),
            encoding: overrides.encoding.or(self.encoding),
            debug: overrides.debug.or(self.debug),
            repair_on_mismatch: overrides.repair_on_mismatch.or(self.repair_on_mismatch),
            default_selection_toggle: overrides.default_selection_toggle.or(self.default_selection_toggle),
            default_document_toggle: overrides.default_document_toggle.or(self.default_document_toggle),
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub rules: ClassificationRules,
    #[builder(default)]
    pub count_mode: CountMode,
    #[builder(default)]
    pub encoding: Encoding,
    /// Recompute from scratch after every incremental update and compare.
    #[builder(default)]
    pub debug: bool,
    #[builder(default)]
    pub repair_policy: RepairPolicy,
    #[builder(default = "true")]
    pub default_selection_toggle: bool,
    #[builder(default = "true")]
    pub default_document_toggle: bool,
}

impl Config {
    /// Validate `options` into a configuration.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingPattern`] when either pattern is absent
    /// - [`DomainError::InvalidPattern`] when a pattern does not compile
    /// - [`DomainError::InvalidConfiguration`] for an unknown count mode or encoding
    pub fn from_options(options: &ConfigOptions) -> DomainResult<Self> {
        let white_space = options
            .white_space
            .as_deref()
            .ok_or(DomainError::MissingPattern { key: "whiteSpace" })?;
        let new_line = options.new_line.as_deref().ok_or(DomainError::MissingPattern { key: "newLine" })?;
        let rules = ClassificationRules::from_patterns(white_space, new_line)?;

        let count_mode = options
            .character_count
            .as_deref()
            .map(str::parse::<CountMode>)
            .transpose()
            .map_err(|reason| DomainError::InvalidConfiguration { reason })?
            .unwrap_or_default();
        let encoding = options
            .encoding
            .as_deref()
            .map(str::parse::<Encoding>)
            .transpose()
            .map_err(|reason| DomainError::InvalidConfiguration { reason })?
            .unwrap_or_default();
        let repair_policy = match options.repair_on_mismatch {
            Some(false) => RepairPolicy::Keep,
            _ => RepairPolicy::Recompute,
        };

        ConfigBuilder::default()
            .rules(rules)
            .count_mode(count_mode)
            .encoding(encoding)
            .debug(options.debug.unwrap_or(false))
            .repair_policy(repair_policy)
            .default_selection_toggle(options.default_selection_toggle.unwrap_or(true))
            .default_document_toggle(options.default_document_toggle.unwrap_or(true))
            .build()
            .map_err(|err| DomainError::InvalidConfiguration { reason: err.to_string() })
    }

    /// The encoder active under this configuration; `None` in character mode.
    pub fn encoder(&self) -> Option<Arc<dyn ByteEncoder>> {
        match self.count_mode {
            CountMode::Character => None,
            CountMode::Byte => Some(self.encoding.encoder()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: ClassificationRules::default(),
            count_mode: CountMode::default(),
            encoding: Encoding::default(),
            debug: false,
            repair_policy: RepairPolicy::default(),
            default_selection_toggle: true,
            default_document_toggle: true,
        }
    }
}
