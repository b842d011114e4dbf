// src/lib.rs
//! Incremental line, word, character and byte counts for live text buffers.
//!
//! The counting core lives in the workspace crates and is re-exported here; this package
//! adds the `livecount` command-line host.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod presentation;
pub mod replay;

pub use livecount_domain::{
    ClassificationRules, Config, ConfigOptions, CountMode, DisplayStatistic, DocumentDisplay, Encoding,
    RepairPolicy, SelectionDisplay, SelectionStatistic, TextEdit, compute_statistic,
};
pub use livecount_ports::{DocumentSource, Notifier, Severity};
pub use livecount_shared_kernel::{DocumentId, LivecountError, Result, Statistic};
pub use livecount_usecase::{CacheManager, UpdateReport, WordCounter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
