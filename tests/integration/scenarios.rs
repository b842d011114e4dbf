// tests/integration/scenarios.rs
use std::cell::RefCell;

use livecount::{
    CacheManager, ClassificationRules, Config, ConfigOptions, DisplayStatistic, DocumentDisplay, DocumentId,
    DocumentSource, Notifier, Result, Severity, Statistic, TextEdit, WordCounter, compute_statistic,
};

#[derive(Default)]
struct Messages(RefCell<Vec<String>>);

impl Notifier for Messages {
    fn notify(&self, severity: Severity, message: &str) {
        self.0.borrow_mut().push(format!("[{severity}] {message}"));
    }
}

struct Fixed(&'static str);

impl DocumentSource for Fixed {
    fn full_text(&self, _id: &DocumentId) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn count(text: &str) -> Statistic {
    compute_statistic(text, &ClassificationRules::default(), None)
}

#[test]
fn counts_plain_text() {
    let stat = count("hello world");
    assert_eq!((stat.characters.value(), stat.words.value(), stat.lines.value()), (11, 2, 0));

    let stat = count("a  b\n");
    assert_eq!((stat.characters.value(), stat.words.value(), stat.lines.value()), (5, 2, 1));

    assert!(count("").is_zero());
}

#[test]
fn deletion_joins_and_insertion_splits() {
    let id = DocumentId::new("doc");
    let mut cache = CacheManager::new(ClassificationRules::default(), None);
    cache.full_update(&id, "foo bar");

    let joined = cache.incremental_update(&id, "foobar", &[TextEdit::delete(3, 1)]).unwrap();
    assert_eq!(joined.statistic.words.value(), 1);

    let split = cache.incremental_update(&id, "foo bar", &[TextEdit::insert(3, " ")]).unwrap();
    assert_eq!(split.statistic.words.value(), 2);
    assert_eq!(split.statistic, count("foo bar"));
}

#[test]
fn full_update_is_idempotent() {
    let id = DocumentId::new("doc");
    let mut cache = CacheManager::new(ClassificationRules::default(), None);
    let first = cache.full_update(&id, "one two\nthree");
    let second = cache.full_update(&id, "one two\nthree");
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[test]
fn byte_mode_measures_whole_string() {
    let options = ConfigOptions { character_count: Some("byte".into()), ..ConfigOptions::with_defaults() };
    let config = Config::from_options(&options).unwrap();
    let encoder = config.encoder().unwrap();
    let stat = compute_statistic("naïve 日本", &config.rules, Some(encoder.as_ref()));
    assert_ne!(stat.bytes.value(), stat.characters.value());
    assert_eq!(stat.bytes.value(), "naïve 日本".len());
}

#[test]
fn editing_session() {
    let messages = Messages::default();
    let options = ConfigOptions { debug: Some(true), ..ConfigOptions::with_defaults() };
    let mut counter = WordCounter::from_options(&options, &messages).unwrap();
    let id = DocumentId::new("session");

    counter.on_open(&id, "The quick fox");
    counter.on_change(&id, "The quick brown fox", &[TextEdit::insert(10, "brown ")]).unwrap();
    counter.on_change(&id, "The quick brown fox\n", &[TextEdit::insert(19, "\n")]).unwrap();
    let display = counter.document_statistic(&id, &Fixed("unused")).unwrap();
    assert_eq!(display, DocumentDisplay::Shown(DisplayStatistic { lines: 1, words: 4, size: 20 }));
    assert!(messages.0.borrow().is_empty(), "{:?}", messages.0.borrow());

    assert!(counter.on_close(&id));
    let display = counter.document_statistic(&id, &Fixed("reopened text")).unwrap();
    assert_eq!(display, DocumentDisplay::Shown(DisplayStatistic { lines: 0, words: 2, size: 13 }));
}

#[test]
fn configuration_change_recounts_from_source() {
    let messages = Messages::default();
    let mut counter = WordCounter::new(Config::default(), &messages);
    let id = DocumentId::new("doc");
    let source = Fixed("a-b c");

    counter.on_open(&id, "a-b c");
    let options = ConfigOptions { white_space: Some("[ -]".into()), ..ConfigOptions::with_defaults() };
    counter.update_config(&options).unwrap();

    let display = counter.document_statistic(&id, &source).unwrap();
    assert_eq!(display, DocumentDisplay::Shown(DisplayStatistic { lines: 0, words: 3, size: 5 }));

    let bad = ConfigOptions { new_line: Some("(".into()), ..ConfigOptions::with_defaults() };
    assert!(counter.update_config(&bad).is_err());
    assert_eq!(messages.0.borrow().len(), 1);
    assert!(messages.0.borrow()[0].starts_with("[error] Invalid wc configuration"));
    assert_eq!(counter.cache().len(), 1);
}
