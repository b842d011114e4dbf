// crates/ports/src/source.rs
use std::ops::Range;

use livecount_domain::text::char_slice;
use livecount_shared_kernel::{DocumentId, Result};

/// Port for reading document text from the host.
pub trait DocumentSource {
    /// The current full text of `id`.
    fn full_text(&self, id: &DocumentId) -> Result<String>;

    /// The characters `range` of `id`.
    ///
    /// The default slices [`DocumentSource::full_text`]; hosts with random access should override it.
    fn range_text(&self, id: &DocumentId, range: Range<usize>) -> Result<String> {
        let text = self.full_text(id)?;
        Ok(char_slice(&text, range)?.to_string())
    }
}
