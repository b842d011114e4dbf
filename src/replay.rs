// src/replay.rs
//! Edit scripts: JSON Lines files standing in for a host's change notifications.
//!
//! Each non-blank line is one batch, written as any of
//!
//! - `{"edits": [...], "text": "..."}` where `text` (optional) is the full text after the
//!   batch, as a host would report it
//! - `[...]`, a bare array of edits
//! - `{"start": 3, "removedLen": 1, "inserted": ""}`, a single edit
//!
//! Edits use character offsets into the text before the batch.
use std::path::Path;

use livecount_domain::{TextEdit, apply_edits};
use livecount_infra::{FileReader, MemoryDocuments};
use livecount_shared_kernel::{ApplicationError, DocumentId, ErrorContext, Result, Statistic};
use livecount_usecase::WordCounter;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBatch {
    pub edits: Vec<TextEdit>,
    pub text: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptLine {
    Batch {
        edits: Vec<TextEdit>,
        #[serde(default)]
        text: Option<String>,
    },
    Edits(Vec<TextEdit>),
    Single(TextEdit),
}

impl From<ScriptLine> for EditBatch {
    fn from(line: ScriptLine) -> Self {
        match line {
            ScriptLine::Batch { edits, text } => Self { edits, text },
            ScriptLine::Edits(edits) => Self { edits, text: None },
            ScriptLine::Single(edit) => Self { edits: vec![edit], text: None },
        }
    }
}

pub fn parse_script(script: &str) -> Result<Vec<EditBatch>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<ScriptLine>(line)
                .map(EditBatch::from)
                .with_context(|| format!("Invalid edit script line {}", index + 1))
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<EditBatch>> {
    let text = FileReader::read_text(path)?;
    parse_script(&text).with_context(|| format!("Failed to read edit script {}", path.display()))
}

/// Feed one batch to `counter` as a change notification and record the new text in `docs`.
///
/// Without an explicit `text`, the batch is applied to the document's current text. When
/// the counter rejects the batch it has already recounted from the new text, which still
/// replaces the document.
pub fn apply_batch(
    counter: &mut WordCounter<'_>,
    docs: &mut MemoryDocuments,
    id: &DocumentId,
    batch: &EditBatch,
) -> Result<Statistic> {
    let next = match &batch.text {
        Some(text) => text.clone(),
        None => {
            let current = docs.get(id).ok_or_else(|| ApplicationError::SourceUnavailable {
                document: id.clone(),
                reason: "document is not open".into(),
            })?;
            apply_edits(current, &batch.edits)?
        }
    };
    let result = counter.on_change(id, &next, &batch.edits);
    docs.insert(id.clone(), next);
    result
}

#[cfg(test)]
mod tests {
    use livecount_domain::Config;
    use livecount_infra::StderrNotifier;

    use super::*;

    #[test]
    fn parses_every_line_shape() {
        let script = r#"
{"edits":[{"start":0,"removedLen":0,"inserted":"x"}],"text":"xab"}
[{"offset":1,"length":1}]

{"rangeOffset":2,"rangeLength":0,"text":" "}
"#;
        let batches = parse_script(script).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].text.as_deref(), Some("xab"));
        assert_eq!(batches[1].edits, vec![TextEdit::delete(1, 1)]);
        assert_eq!(batches[2], EditBatch { edits: vec![TextEdit::insert(2, " ")], text: None });
    }

    #[test]
    fn bad_line_is_located() {
        let err = parse_script("[]\n{\"nope\":1}\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid edit script line 2"));
    }

    #[test]
    fn batches_update_document_and_counter() {
        let notifier = StderrNotifier { quiet: true };
        let mut counter = WordCounter::new(Config::default(), &notifier);
        let mut docs = MemoryDocuments::new();
        let id = DocumentId::new("script");
        docs.insert(id.clone(), "foo bar");
        counter.on_open(&id, "foo bar");

        let stat = apply_batch(&mut counter, &mut docs, &id, &EditBatch { edits: vec![TextEdit::delete(3, 1)], text: None })
            .unwrap();
        assert_eq!(stat.words.value(), 1);
        assert_eq!(docs.get(&id), Some("foobar"));

        let stat = apply_batch(&mut counter, &mut docs, &id, &EditBatch { edits: vec![TextEdit::insert(3, " ")], text: None })
            .unwrap();
        assert_eq!(stat.words.value(), 2);
        assert_eq!(docs.get(&id), Some("foo bar"));
    }

    #[test]
    fn rejected_batch_still_takes_host_text() {
        let notifier = StderrNotifier { quiet: true };
        let mut counter = WordCounter::new(Config::default(), &notifier);
        let mut docs = MemoryDocuments::new();
        let id = DocumentId::new("script");
        docs.insert(id.clone(), "ab");
        counter.on_open(&id, "ab");

        let batch = EditBatch { edits: vec![TextEdit::delete(1, 5)], text: Some("a b c".into()) };
        assert!(apply_batch(&mut counter, &mut docs, &id, &batch).unwrap_err().is_invalid_range());
        assert_eq!(docs.get(&id), Some("a b c"));
        assert_eq!(counter.cache().get(&id).unwrap().words.value(), 3);
    }
}
