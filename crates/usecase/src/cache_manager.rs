// crates/usecase/src/cache_manager.rs
use std::{ops::Range, sync::Arc};

use hashbrown::HashMap;
use livecount_domain::{
    ClassificationRules, Config, RepairPolicy, TextEdit, compute_statistic,
    encoding::ByteEncoder,
    normalize_batch,
    text::{CharCursor, char_len, char_slice},
};
use livecount_shared_kernel::{
    ApplicationError, DocumentId, DomainError, DomainResult, Result, Statistic, StatisticDelta,
};
use log::{debug, warn};

/// What the cache holds for one open document.
#[derive(Debug, Clone)]
struct DocumentState {
    previous_text: String,
    /// Length of `previous_text` in characters.
    char_len: usize,
    statistic: Statistic,
}

/// How an update was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// No entry existed; the document was counted from scratch.
    Created,
    /// The cached statistic was adjusted by the edits.
    Incremental,
}

/// What went wrong with an incremental result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// The self-check recount disagreed with this incremental statistic.
    Differs(Statistic),
    /// Applying this delta would have driven a component below zero.
    Underflow(StatisticDelta),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub drift: Drift,
    pub recomputed: Statistic,
    /// Whether the cache now holds `recomputed`.
    pub repaired: bool,
}

impl Mismatch {
    pub fn to_error(&self, document: &DocumentId) -> ApplicationError {
        match self.drift {
            Drift::Differs(incremental) => ApplicationError::ConsistencyMismatch {
                document: document.clone(),
                incremental,
                recomputed: self.recomputed,
            },
            Drift::Underflow(_) => ApplicationError::DeltaUnderflow {
                document: document.clone(),
                recomputed: self.recomputed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    pub kind: UpdateKind,
    /// The statistic now cached for the document.
    pub statistic: Statistic,
    pub mismatch: Option<Mismatch>,
}

/// Per-document statistics kept in step with the host's edits.
///
/// Each entry remembers the text it was computed from. An edit batch is folded in by
/// counting only the replaced and inserted spans, each framed by the unchanged character on
/// either side, so that words merging or splitting across the edit boundary are accounted for.
#[derive(Debug)]
pub struct CacheManager {
    rules: ClassificationRules,
    encoder: Option<Arc<dyn ByteEncoder>>,
    /// `Some` when every incremental update is verified against a full recount.
    self_check: Option<RepairPolicy>,
    documents: HashMap<DocumentId, DocumentState>,
}

impl CacheManager {
    pub fn new(rules: ClassificationRules, encoder: Option<Arc<dyn ByteEncoder>>) -> Self {
        Self { rules, encoder, self_check: None, documents: HashMap::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rules.clone(), config.encoder()).with_self_check(self_check_policy(config))
    }

    #[must_use]
    pub fn with_self_check(mut self, policy: Option<RepairPolicy>) -> Self {
        self.self_check = policy;
        self
    }

    pub fn set_self_check(&mut self, policy: Option<RepairPolicy>) {
        self.self_check = policy;
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }

    pub fn encoder(&self) -> Option<&dyn ByteEncoder> {
        self.encoder.as_deref()
    }

    /// Swap the counting rules. Every cached statistic is stale afterwards and is dropped.
    pub fn reconfigure(&mut self, rules: ClassificationRules, encoder: Option<Arc<dyn ByteEncoder>>) {
        self.rules = rules;
        self.encoder = encoder;
        let dropped = self.invalidate_all();
        debug!("counting rules changed; dropped {dropped} cached document(s)");
    }

    /// Full count of `text` under the current rules. Touches no cached state.
    pub fn compute(&self, text: &str) -> Statistic {
        compute_statistic(text, &self.rules, self.encoder())
    }

    pub fn get(&self, id: &DocumentId) -> Option<Statistic> {
        self.documents.get(id).map(|state| state.statistic)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.documents.contains_key(id)
    }

    /// The text the cached statistic of `id` was computed from.
    pub fn previous_text(&self, id: &DocumentId) -> Option<&str> {
        self.documents.get(id).map(|state| state.previous_text.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The cached statistic of `id`, counting the text produced by `load` if there is none.
    ///
    /// # Errors
    ///
    /// Whatever `load` fails with; the cache is left unchanged.
    pub fn get_or_create<F, E>(&mut self, id: &DocumentId, load: F) -> std::result::Result<Statistic, E>
    where
        F: FnOnce() -> std::result::Result<String, E>,
    {
        if let Some(statistic) = self.get(id) {
            return Ok(statistic);
        }
        let text = load()?;
        Ok(self.full_update(id, &text))
    }

    /// Count `full_text` from scratch and make it the cached state of `id`.
    pub fn full_update(&mut self, id: &DocumentId, full_text: &str) -> Statistic {
        let statistic = self.compute(full_text);
        let char_len = char_len(full_text);
        match self.documents.get_mut(id) {
            Some(state) => {
                state.previous_text.clear();
                state.previous_text.push_str(full_text);
                state.char_len = char_len;
                state.statistic = statistic;
                debug!("recounted {id}: {statistic}");
            }
            None => {
                self.documents.insert(
                    id.clone(),
                    DocumentState { previous_text: full_text.to_owned(), char_len, statistic },
                );
                debug!("cached {id}: {statistic}");
            }
        }
        statistic
    }

    /// Fold `edits` (offsets into the cached previous text) into the statistic of `id`;
    /// `full_text` is the text after the edits and becomes the new previous text.
    ///
    /// Without a cached entry this is a [`CacheManager::full_update`]. A delta that would
    /// drive a component negative is answered with a full recount and reported as a mismatch.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidRange`] or [`DomainError::OverlappingEdits`] when the batch does
    /// not fit the previous text. The entry is left untouched.
    pub fn incremental_update(
        &mut self,
        id: &DocumentId,
        full_text: &str,
        edits: &[TextEdit],
    ) -> DomainResult<UpdateReport> {
        let Some(state) = self.documents.get(id) else {
            debug!("no cached state for {id}; counting from scratch");
            let statistic = self.full_update(id, full_text);
            return Ok(UpdateReport { kind: UpdateKind::Created, statistic, mismatch: None });
        };

        let batch = normalize_batch(edits, state.char_len)?;
        let delta = self.batch_delta(&state.previous_text, state.char_len, &batch)?;

        let (statistic, mismatch) = match state.statistic.checked_apply(delta) {
            Some(incremental) => self.verify(id, incremental, full_text),
            None => {
                let recomputed = self.compute(full_text);
                warn!("negative statistic for {id} after {delta:?}; recounted as {recomputed}");
                let mismatch = Mismatch { drift: Drift::Underflow(delta), recomputed, repaired: true };
                (recomputed, Some(mismatch))
            }
        };

        if let Some(state) = self.documents.get_mut(id) {
            state.previous_text.clear();
            state.previous_text.push_str(full_text);
            state.char_len = char_len(full_text);
            state.statistic = statistic;
        }
        debug!("{id}: {} edit(s) applied, now {statistic}", batch.len());
        Ok(UpdateReport { kind: UpdateKind::Incremental, statistic, mismatch })
    }

    /// Drop the entry of `id`. Returns whether there was one.
    pub fn invalidate(&mut self, id: &DocumentId) -> bool {
        let removed = self.documents.remove(id).is_some();
        if removed {
            debug!("dropped cached state for {id}");
        }
        removed
    }

    /// Drop every entry. Returns how many there were.
    pub fn invalidate_all(&mut self) -> usize {
        let count = self.documents.len();
        self.documents.clear();
        count
    }

    /// Count the characters `range` of `text`. Touches no cached state.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidRange`] when `range` is not inside `text`.
    pub fn range_statistic(&self, text: &str, range: Range<usize>) -> DomainResult<Statistic> {
        Ok(self.compute(char_slice(text, range)?))
    }

    /// Count the characters `range` of the cached previous text of `id`.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::DocumentNotCached`] without an entry, otherwise as
    /// [`CacheManager::range_statistic`].
    pub fn document_range_statistic(&self, id: &DocumentId, range: Range<usize>) -> Result<Statistic> {
        let state = self
            .documents
            .get(id)
            .ok_or_else(|| ApplicationError::DocumentNotCached { document: id.clone() })?;
        Ok(self.range_statistic(&state.previous_text, range)?)
    }

    /// Sum of the per-edit deltas of a normalized batch.
    fn batch_delta(&self, previous: &str, len: usize, batch: &[TextEdit]) -> DomainResult<StatisticDelta> {
        let mut cursor = CharCursor::new(previous);
        let mut delta = StatisticDelta::default();
        for edit in batch {
            let invalid = || DomainError::InvalidRange { start: edit.start, end: edit.end(), len };
            let start = cursor.byte_offset(edit.start).ok_or_else(invalid)?;
            let end = cursor.byte_offset(edit.end()).ok_or_else(invalid)?;
            let before = cursor.char_before(start);
            let after = cursor.char_at(end);

            let removed = self.compute(&framed(before, &previous[start..end], after));
            let inserted = self.compute(&framed(before, &edit.inserted, after));
            delta += StatisticDelta::between(&removed, &inserted);
        }
        Ok(delta)
    }

    fn verify(&self, id: &DocumentId, incremental: Statistic, full_text: &str) -> (Statistic, Option<Mismatch>) {
        let Some(policy) = self.self_check else {
            return (incremental, None);
        };
        let recomputed = self.compute(full_text);
        if recomputed == incremental {
            return (incremental, None);
        }

        let repaired = policy == RepairPolicy::Recompute;
        warn!("incremental count for {id} drifted: {incremental} != {recomputed} (repaired: {repaired})");
        let statistic = if repaired { recomputed } else { incremental };
        (statistic, Some(Mismatch { drift: Drift::Differs(incremental), recomputed, repaired }))
    }
}

/// The self-check setting implied by `config`.
pub fn self_check_policy(config: &Config) -> Option<RepairPolicy> {
    config.debug.then_some(config.repair_policy)
}

/// `body` with the neighbouring characters on either side, when there are any.
fn framed(before: Option<char>, body: &str, after: Option<char>) -> String {
    let mut out = String::with_capacity(body.len() + 8);
    out.extend(before);
    out.push_str(body);
    out.extend(after);
    out
}
