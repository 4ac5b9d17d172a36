//! Tests for the record store load lifecycle.

use featws_core::store::{LoadRequest, LoadState, RecordStore, RetrievalError};
use featws_model::{RuleSheet, SheetId};

fn fixture_sheet() -> RuleSheet {
    RuleSheet {
        id: SheetId::new("1").unwrap(),
        name: "Internet APF".to_string(),
        slug: "internet-apf".to_string(),
        description: String::new(),
        code: "12345678".to_string(),
        rules: Vec::new(),
    }
}

#[test]
fn starts_idle() {
    let store = RecordStore::new();
    assert_eq!(*store.state(), LoadState::Idle);
}

#[test]
fn second_load_while_loading_is_suppressed() {
    let mut store = RecordStore::new();
    let first = store.begin_load();
    assert!(matches!(first, LoadRequest::Started { .. }));
    // Rapid second call before the first completes: exactly one retrieval.
    assert_eq!(store.begin_load(), LoadRequest::DuplicateSuppressed);
    assert!(store.state().is_loading());
}

#[test]
fn successful_completion_stores_the_sheet() {
    let mut store = RecordStore::new();
    let LoadRequest::Started { epoch } = store.begin_load() else {
        panic!("load should start");
    };
    assert!(store.complete(epoch, Ok(fixture_sheet())));
    assert_eq!(store.state().sheet().unwrap().name, "Internet APF");
}

#[test]
fn failed_completion_records_the_reason() {
    let mut store = RecordStore::new();
    let LoadRequest::Started { epoch } = store.begin_load() else {
        panic!("load should start");
    };
    let error = RetrievalError::TimedOut { timeout_ms: 5000 };
    assert!(store.complete(epoch, Err(error)));
    match store.state() {
        LoadState::Failed { reason } => {
            assert!(reason.contains("timed out"), "reason: {reason}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn retry_after_failure_starts_a_fresh_load() {
    let mut store = RecordStore::new();
    let LoadRequest::Started { epoch } = store.begin_load() else {
        panic!("load should start");
    };
    store.complete(
        epoch,
        Err(RetrievalError::Transport {
            reason: "connection refused".to_string(),
        }),
    );
    assert!(matches!(store.begin_load(), LoadRequest::Started { .. }));
    assert!(store.state().is_loading());
}

#[test]
fn stale_completion_is_ignored() {
    let mut store = RecordStore::new();
    let LoadRequest::Started { epoch: first } = store.begin_load() else {
        panic!("load should start");
    };
    // The view reloaded before the first fetch finished.
    store.complete(first, Err(RetrievalError::TimedOut { timeout_ms: 1 }));
    let LoadRequest::Started { epoch: second } = store.begin_load() else {
        panic!("reload should start");
    };
    assert_ne!(first, second);
    // The slow first completion arrives now and must be dropped.
    assert!(!store.complete(first, Ok(fixture_sheet())));
    assert!(store.state().is_loading());
    assert!(store.complete(second, Ok(fixture_sheet())));
}

#[test]
fn completion_after_reset_is_a_no_op() {
    let mut store = RecordStore::new();
    let LoadRequest::Started { epoch } = store.begin_load() else {
        panic!("load should start");
    };
    // View teardown while the fetch is in flight.
    store.reset();
    assert!(!store.complete(epoch, Ok(fixture_sheet())));
    assert_eq!(*store.state(), LoadState::Idle);
}
