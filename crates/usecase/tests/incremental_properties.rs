use std::sync::Arc;

use livecount_domain::{ClassificationRules, TextEdit, Utf16Encoder, apply_edits};
use livecount_shared_kernel::DocumentId;
use livecount_usecase::CacheManager;
use proptest::prelude::*;

/// Turn raw `(gap, removed, inserted)` triples into a valid, non-overlapping batch over a
/// text of `len` characters. A zero gap produces touching edits.
fn build_batch(len: usize, raw: Vec<(usize, usize, String)>, reverse: bool) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    let mut pos = 0;
    for (gap, removed, inserted) in raw {
        let start = pos + gap;
        if start + removed > len {
            break;
        }
        edits.push(TextEdit::new(start, removed, inserted));
        pos = start + removed;
    }
    if reverse {
        edits.reverse();
    }
    edits
}

fn raw_edits() -> impl Strategy<Value = Vec<(usize, usize, String)>> {
    prop::collection::vec((0usize..4, 0usize..4, "[ab \n日]{0,4}"), 0..6)
}

proptest! {
    #[test]
    fn incremental_matches_full_recount(
        text in "[ab \n日]{0,40}",
        raw in raw_edits(),
        reverse in any::<bool>(),
    ) {
        let id = DocumentId::new("prop");
        let mut cache = CacheManager::new(ClassificationRules::default(), Some(Arc::new(Utf16Encoder)));
        cache.full_update(&id, &text);

        let edits = build_batch(text.chars().count(), raw, reverse);
        let next = apply_edits(&text, &edits).unwrap();
        let report = cache.incremental_update(&id, &next, &edits).unwrap();

        prop_assert_eq!(report.mismatch, None);
        prop_assert_eq!(report.statistic, cache.compute(&next));
    }

    #[test]
    fn successive_batches_stay_consistent(
        text in "[ab \t\n]{0,30}",
        batches in prop::collection::vec(raw_edits(), 1..5),
    ) {
        let id = DocumentId::new("prop");
        let rules = ClassificationRules::from_patterns(r"[ \t\n]", r"\n").unwrap();
        let mut cache = CacheManager::new(rules, None);
        cache.full_update(&id, &text);

        let mut current = text;
        for raw in batches {
            let edits = build_batch(current.chars().count(), raw, false);
            let next = apply_edits(&current, &edits).unwrap();
            let stat = cache.incremental_update(&id, &next, &edits).unwrap().statistic;
            prop_assert_eq!(stat, cache.compute(&next));
            current = next;
        }
        prop_assert_eq!(cache.previous_text(&id), Some(current.as_str()));
    }

    #[test]
    fn concatenation_matches_split_count(left in "[ab \n]{0,20}", right in "[ab \n]{0,20}") {
        // Inserting `right` at the end of `left` is the simplest boundary case.
        let id = DocumentId::new("prop");
        let mut cache = CacheManager::new(ClassificationRules::default(), None);
        cache.full_update(&id, &left);
        let joined = format!("{left}{right}");
        let edits = [TextEdit::insert(left.chars().count(), right.clone())];
        let stat = cache.incremental_update(&id, &joined, &edits).unwrap().statistic;
        prop_assert_eq!(stat, cache.compute(&joined));
    }
}
