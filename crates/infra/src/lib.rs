// crates/infra/src/lib.rs
//! Adapters between the counting core and the outside world: files, settings files,
//! user notification and document text sources.
#![allow(clippy::multiple_crate_versions)]

pub mod documents;
pub mod notifier;
pub mod persistence;
pub mod settings;

pub use documents::{FileDocuments, MemoryDocuments};
pub use notifier::{LogNotifier, StderrNotifier};
pub use persistence::FileReader;
pub use settings::{SettingsFormat, load_settings, parse_settings};
