// crates/infra/src/documents.rs
use std::{ops::Range, path::Path};

use hashbrown::HashMap;
use livecount_domain::text::char_slice;
use livecount_ports::DocumentSource;
use livecount_shared_kernel::{ApplicationError, DocumentId, Result};

use crate::persistence::FileReader;

/// Open documents held in memory, keyed by id.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocuments {
    texts: HashMap<DocumentId, String>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` as the content of `id`, returning the previous content.
    pub fn insert(&mut self, id: DocumentId, text: impl Into<String>) -> Option<String> {
        self.texts.insert(id, text.into())
    }

    pub fn get(&self, id: &DocumentId) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    fn text(&self, id: &DocumentId) -> Result<&str> {
        self.get(id).ok_or_else(|| {
            ApplicationError::SourceUnavailable { document: id.clone(), reason: "document is not open".into() }
                .into()
        })
    }
}

impl DocumentSource for MemoryDocuments {
    fn full_text(&self, id: &DocumentId) -> Result<String> {
        self.text(id).map(str::to_owned)
    }

    fn range_text(&self, id: &DocumentId, range: Range<usize>) -> Result<String> {
        Ok(char_slice(self.text(id)?, range)?.to_owned())
    }
}

/// Documents read from disk on demand; the id is the file path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDocuments;

impl DocumentSource for FileDocuments {
    fn full_text(&self, id: &DocumentId) -> Result<String> {
        Ok(FileReader::read_text(Path::new(id.as_str()))?)
    }
}
