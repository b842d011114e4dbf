//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`cache_manager`]: per-document cached statistics and the incremental update
//! - [`word_counter`]: the host-facing service reacting to editor events
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod cache_manager;
pub mod word_counter;

pub use cache_manager::{CacheManager, Drift, Mismatch, UpdateKind, UpdateReport, self_check_policy};
pub use word_counter::WordCounter;
