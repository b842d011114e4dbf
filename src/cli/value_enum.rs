// src/cli/value_enum.rs
use clap::ValueEnum;
use livecount_domain::{CountMode, Encoding};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCountMode {
    Character,
    Byte,
}

impl From<CliCountMode> for CountMode {
    fn from(value: CliCountMode) -> Self {
        match value {
            CliCountMode::Character => CountMode::Character,
            CliCountMode::Byte => CountMode::Byte,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliEncoding {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "utf-16", alias = "utf16")]
    Utf16,
}

impl From<CliEncoding> for Encoding {
    fn from(value: CliEncoding) -> Self {
        match value {
            CliEncoding::Utf8 => Encoding::Utf8,
            CliEncoding::Utf16 => Encoding::Utf16,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// `wc (all): ( L | W | S )` status lines
    #[default]
    Status,
    /// One JSON object per report
    Json,
}
