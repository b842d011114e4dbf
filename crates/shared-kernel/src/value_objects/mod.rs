// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod document_id;
pub mod statistic;

pub use counts::{ByteCount, CharCount, LineCount, WordCount};
pub use document_id::DocumentId;
pub use statistic::{Statistic, StatisticDelta};
