//! # Domain
//!
//! Pure counting logic for livecount:
//!
//! - [`classification`]: whitespace/newline predicates compiled from patterns
//! - [`engine`]: the statistic computation over a span of text
//! - [`edit`]: edit batches expressed in character offsets
//! - [`encoding`]: byte encoders used for byte-mode sizing
//! - [`config`]: validated configuration and its raw options
//! - [`display`]: values handed to the display sink
//!
//! Nothing here holds state across calls; caching lives in the use case layer.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classification;
pub mod config;
pub mod display;
pub mod edit;
pub mod encoding;
pub mod engine;
pub mod text;

pub use classification::{CharClass, ClassificationRules};
pub use config::{Config, ConfigBuilder, ConfigOptions, CountMode, RepairPolicy};
pub use display::{DisplayStatistic, DisplayToggles, DocumentDisplay, SelectionDisplay, SelectionStatistic};
pub use edit::{TextEdit, apply_edits, normalize_batch};
pub use encoding::{ByteEncoder, Encoding, Utf8Encoder, Utf16Encoder};
pub use engine::compute_statistic;

pub use livecount_shared_kernel::{DocumentId, Statistic, StatisticDelta};
