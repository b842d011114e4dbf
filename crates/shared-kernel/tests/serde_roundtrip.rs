use livecount_shared_kernel::{DocumentId, LineCount, Statistic};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    document: DocumentId,
    lines: LineCount,
    stat: Statistic,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        document: DocumentId::new("file:///notes.txt"),
        lines: LineCount::from(42),
        stat: Statistic::new(11, 11, 2, 0),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert!(json.contains("\"document\":\"file:///notes.txt\""));
    assert!(json.contains("\"lines\":42"));
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
