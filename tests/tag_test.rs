use std::path::PathBuf;

use whydoc::tag::{aggregate, Raw};

fn raw(name: &str, content: &str, file: &str) -> Raw {
    Raw {
        name: name.to_string(),
        content: content.to_string(),
        source_file: PathBuf::from(file),
    }
}

#[test]
fn test_aggregate_empty() {
    let table = aggregate(Vec::new());
    assert!(table.is_empty());
}

#[test]
fn test_aggregate_keys_by_name() {
    let table = aggregate(vec![raw("foo", "foo text", "a.rs"), raw("bar", "bar text", "b.rs")]);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("foo").unwrap().value, "foo text");
    assert_eq!(table.get("bar").unwrap().value, "bar text");
}

#[test]
fn test_aggregate_duplicate_last_occurrence_wins() {
    let table = aggregate(vec![
        raw("foo", "first", "a.rs"),
        raw("bar", "other", "a.rs"),
        raw("foo", "second", "b.rs"),
    ]);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("foo").unwrap().value, "second");
}

#[test]
fn test_aggregate_preserves_scan_order() {
    let table = aggregate(vec![
        raw("zulu", "z", "a.rs"),
        raw("alpha", "a", "a.rs"),
        raw("mike", "m", "b.rs"),
    ]);

    let names: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);
}
