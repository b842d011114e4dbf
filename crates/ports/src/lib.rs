//! # Ports
//!
//! Interface definitions for the host environment.
//!
//! - [`source`]: document text retrieval by identity
//! - [`notify`]: user-visible messages (configuration and consistency problems)
//!
//! The use case layer talks to the host only through these traits.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod notify;
pub mod source;

pub use notify::{Notifier, Severity};
pub use source::DocumentSource;
