//!
//! The history store tests.
//!

use std::time::Duration;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

use crate::merger;
use crate::model::document::Document;
use crate::model::commit::identity::Identity;
use crate::model::commit::CommitRef;
use crate::model::entry::Benches;
use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;
use crate::model::measurement::Measurement;

use super::error::Error;
use super::file::format::Format;
use super::file::FileStore;
use super::memory::MemoryStore;
use super::IStore;

fn key() -> HistoryKey {
    HistoryKey::new("https://github.com/MoBlaa/irc_rust", "Benchmark")
}

fn history(ids: &[&str]) -> SuiteHistory {
    let mut history = SuiteHistory::new();
    for (index, id) in ids.iter().enumerate() {
        let mut benches = Benches::new();
        benches.insert(
            "bench__bench_parse".to_owned(),
            Measurement::new(1168.0 + index as f64, 3.5, "ns/iter").expect("Always valid"),
        );
        let entry = Entry::new(
            CommitRef::new(
                *id,
                Identity::new("moblaa", "moblaa@pm.me"),
                "message",
                DateTime::parse_from_rfc3339("2020-09-07T18:49:28+02:00").expect("Always valid"),
            ),
            Utc.timestamp_millis_opt(1_599_497_466_782 + index as i64).unwrap(),
            "cargo",
            benches,
        );
        history = merger::merge(history, entry).0;
    }
    history
}

#[test]
fn memory_store() {
    let store = MemoryStore::new();
    assert_eq!(store.load(&key()).expect("Always valid"), SuiteHistory::new());

    let history = history(&["a", "b"]);
    store.save(&key(), &history).expect("Always valid");
    assert_eq!(store.load(&key()).expect("Always valid"), history);
    assert_eq!(store.keys(), vec![key()]);
}

#[test]
fn file_store_missing_history_is_empty() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);

    assert_eq!(store.load(&key()).expect("Always valid"), SuiteHistory::new());
    assert_eq!(store.keys().expect("Always valid"), vec![]);
}

#[test]
fn file_store_round_trip() {
    for format in [Format::Json, Format::DataJs] {
        let directory = tempfile::tempdir().expect("Failed to create a directory");
        let store = FileStore::new(directory.path().to_owned(), format);
        let history = history(&["a", "b", "c"]);

        store.save(&key(), &history).expect("Failed to save");
        assert_eq!(store.load(&key()).expect("Failed to load"), history);

        let path = store.path(&key());
        assert_eq!(
            path,
            directory
                .path()
                .join("github.com_MoBlaa_irc_rust")
                .join(format!("Benchmark.{}", format.extension()))
        );
        let text = std::fs::read_to_string(path).expect("Failed to read");
        assert_eq!(
            text.starts_with(Format::DATA_JS_PREFIX),
            format == Format::DataJs
        );
        assert!(text.contains("\"range\": \"± 3.5\""));
    }
}

#[test]
fn file_store_replaces_without_leftovers() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);

    store.save(&key(), &history(&["a"])).expect("Failed to save");
    store.save(&key(), &history(&["a", "b"])).expect("Failed to save");

    let files: Vec<_> = std::fs::read_dir(store.path(&key()).parent().expect("Always exists"))
        .expect("Failed to list")
        .map(|entry| entry.expect("Failed to list").file_name())
        .collect();
    assert_eq!(files, vec!["Benchmark.json"]);
    assert_eq!(store.load(&key()).expect("Failed to load").len(), 2);
}

#[test]
fn file_store_reads_published_data_js() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::DataJs);
    let path = store.path(&key());
    std::fs::create_dir_all(path.parent().expect("Always exists")).expect("Failed to create");
    std::fs::write(
        path.as_path(),
        format!(
            "window.BENCHMARK_DATA = {{ \"lastUpdate\": 1, \"repoUrl\": \"{}\", \"entries\": {{}} }};\n",
            key().repository
        ),
    )
    .expect("Failed to write");

    assert_eq!(store.load(&key()).expect("Failed to load"), SuiteHistory::new());
    assert_eq!(store.keys().expect("Failed to list"), vec![]);
}

#[test]
fn file_store_corrupt_document_is_not_retryable() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    let path = store.path(&key());
    std::fs::create_dir_all(path.parent().expect("Always exists")).expect("Failed to create");
    std::fs::write(path.as_path(), "{ \"lastUpdate\": ").expect("Failed to write");

    let error = store.load(&key()).expect_err("Must fail");
    assert!(matches!(error, Error::Parsing { .. }));
    assert!(!error.is_retryable());
}

#[test]
fn file_store_detects_foreign_repository() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    store
        .save(&HistoryKey::new("https://host/a/b", "suite"), &history(&["a"]))
        .expect("Failed to save");

    let error = store
        .load(&HistoryKey::new("https://host/a_b", "suite"))
        .expect_err("Must fail");
    assert!(matches!(error, Error::Conflict { ref repository, .. } if repository == "https://host/a/b"));
}

#[test]
fn file_store_keys() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    let first = HistoryKey::new("https://host/a", "parser");
    let second = HistoryKey::new("https://host/a", "tokenizer");
    let third = HistoryKey::new("https://host/b", "parser");
    for key in [&third, &first, &second] {
        store.save(key, &history(&["a"])).expect("Failed to save");
    }

    assert_eq!(store.keys().expect("Failed to list"), vec![first, second, third]);
}

#[test]
fn file_store_path_components_are_safe() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);

    let path = store.path(&HistoryKey::new("..", "../../etc/passwd"));
    assert!(path.starts_with(directory.path()));
    assert_eq!(
        path.strip_prefix(directory.path())
            .expect("Always valid")
            .components()
            .count(),
        2
    );
}

#[test]
fn file_store_lock() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json)
        .with_lock_timeout(Duration::from_millis(120));

    let lock = store.lock(&key()).expect("Failed to lock");
    let error = store.lock(&key()).expect_err("Must time out");
    assert!(matches!(error, Error::LockTimeout { .. }));
    assert!(error.is_retryable());

    drop(lock);
    let _lock = store.lock(&key()).expect("Failed to lock after release");
}

#[test]
fn file_store_suites_sharing_a_file_are_kept() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    let spaced = HistoryKey::new("https://host/a", "Rust Benchmark");
    let underscored = HistoryKey::new("https://host/a", "Rust_Benchmark");
    assert_eq!(store.path(&spaced), store.path(&underscored));

    let original = history(&["a", "b"]);
    store.save(&spaced, &original).expect("Failed to save");
    assert!(store.load(&underscored).expect("Failed to load").is_empty());
    store
        .save(&underscored, &history(&["c"]))
        .expect("Failed to save");

    assert_eq!(store.load(&spaced).expect("Failed to load"), original);
    assert_eq!(store.load(&underscored).expect("Failed to load").len(), 1);
    assert_eq!(
        store.keys().expect("Failed to list"),
        vec![spaced, underscored]
    );
}

#[test]
fn file_store_save_keeps_other_suites_of_the_document() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    let parser = HistoryKey::new("https://host/a", "parser");
    let path = store.path(&parser);
    let other = history(&["x", "y"]);
    let document = Document::from_history(&parser, &history(&["a"])).with_history("other", &other);
    std::fs::create_dir_all(path.parent().expect("Always exists")).expect("Failed to create");
    std::fs::write(path.as_path(), Format::Json.serialize(&document)).expect("Failed to write");

    assert_eq!(store.keys().expect("Failed to list"), vec![parser.clone()]);

    let loaded = store.load(&parser).expect("Failed to load");
    let entry = history(&["a", "b"]).entries()[1].clone();
    let (merged, _outcome) = merger::merge(loaded, entry);
    store.save(&parser, &merged).expect("Failed to save");

    let text = std::fs::read_to_string(path.as_path()).expect("Failed to read");
    let document = Format::parse(text.as_str()).expect("Failed to parse");
    assert_eq!(document.suites().collect::<Vec<&str>>(), vec!["parser", "other"]);
    assert_eq!(document.clone().into_history("other").entries(), other.entries());
    assert_eq!(document.into_history("parser").len(), 2);
}

#[test]
fn file_store_save_refuses_foreign_repository() {
    let directory = tempfile::tempdir().expect("Failed to create a directory");
    let store = FileStore::new(directory.path().to_owned(), Format::Json);
    let owner = HistoryKey::new("https://host/a/b", "suite");
    store.save(&owner, &history(&["a"])).expect("Failed to save");

    let error = store
        .save(&HistoryKey::new("https://host/a_b", "suite"), &history(&["z"]))
        .expect_err("Must fail");
    assert!(matches!(error, Error::Conflict { .. }));
    assert_eq!(store.load(&owner).expect("Failed to load"), history(&["a"]));
}
