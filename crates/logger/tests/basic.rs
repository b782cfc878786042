//! End-to-end tests for the logger against the in-memory store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cloudlog_logger::{fields, LegacyLogger, Level, LogError, Logger, LoggerOptions};
use cloudlog_store::{ModelId, Record};
use cloudlog_store_memory::MemoryStore;

const MODEL: ModelId = ModelId(42);

fn options(level: Level) -> LoggerOptions {
    LoggerOptions::new()
        .csk("csk#secret")
        .aci("aci#id")
        .level(level)
        .model(42u64)
}

/// Give the background worker a moment to drain.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn test_threshold_gates_submission() {
    let store = MemoryStore::new();
    let logger = Logger::new(options(Level::Error), store.clone()).unwrap();

    logger.debug("x", None, None);
    settle().await;
    assert_eq!(store.stored(MODEL).await, 0);

    logger.fatal("x", None, None);
    settle().await;

    let records = store.records(MODEL).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get_str(fields::TEXT), Some("x"));
    assert_eq!(records[0].get_str(fields::LEVEL), Some("fatal"));
}

#[tokio::test]
async fn test_gate_truth_table() {
    let calls = [
        Level::Trace,
        Level::Info,
        Level::Debug,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];
    let thresholds = [
        Level::Trace,
        Level::Info,
        Level::Debug,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    for threshold in thresholds {
        let store = MemoryStore::new();
        let logger = Logger::new(options(threshold), store.clone()).unwrap();

        for call in calls {
            match call {
                Level::Trace => logger.trace("t", None, None),
                Level::Info => logger.info("t", None, None),
                Level::Debug => logger.debug("t", None, None),
                Level::Warn => logger.warn("t", None, None),
                Level::Error => logger.error("t", None, None),
                Level::Fatal => logger.fatal("t", None, None),
                Level::Off => unreachable!(),
            }
        }
        settle().await;

        let expected = calls.iter().filter(|call| **call >= threshold).count();
        assert_eq!(
            store.stored(MODEL).await,
            expected,
            "threshold {threshold}"
        );
    }
}

#[derive(Default)]
struct CountingLegacy {
    calls: AtomicUsize,
}

impl LegacyLogger for CountingLegacy {
    fn trace(&self, _text: &str, _error: Option<&LogError>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn debug(&self, _text: &str, _error: Option<&LogError>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn fatal(&self, _text: &str, _error: Option<&LogError>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_legacy_invoked_regardless_of_gate() {
    let store = MemoryStore::new();
    let legacy = Arc::new(CountingLegacy::default());
    let logger = Logger::new(
        options(Level::Fatal).legacy(legacy.clone()),
        store.clone(),
    )
    .unwrap();

    // Trace and debug are gated out, fatal is not; all three reach the
    // legacy logger. Warn has no legacy implementation, which is fine.
    logger.trace("t", None, None);
    logger.debug("t", None, None);
    logger.warn("t", None, None);
    logger.fatal("t", None, None);
    settle().await;

    assert_eq!(legacy.calls.load(Ordering::SeqCst), 3);
    assert_eq!(store.stored(MODEL).await, 1);
}

struct PanickingLegacy;

impl LegacyLogger for PanickingLegacy {
    fn error(&self, _text: &str, _error: Option<&LogError>) {
        panic!("legacy logger blew up");
    }
}

#[tokio::test]
async fn test_legacy_panic_does_not_disturb_emission() {
    let store = MemoryStore::new();
    let logger = Logger::new(
        options(Level::Error).legacy(Arc::new(PanickingLegacy)),
        store.clone(),
    )
    .unwrap();

    logger.error("still emitted", None, None);
    settle().await;

    let records = store.records(MODEL).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get_str(fields::TEXT), Some("still emitted"));
}

#[tokio::test]
async fn test_backtrace_flag_controls_trace_field() {
    let store = MemoryStore::new();
    let error = LogError::new("boom").with_backtrace("frame 1");

    let silent = Logger::new(options(Level::Trace), store.clone()).unwrap();
    silent.error("without", Some(&error), None);
    settle().await;
    assert!(!store.records(MODEL).await[0].contains(fields::TRACE));

    let verbose = Logger::new(options(Level::Trace).backtrace(true), store.clone()).unwrap();
    verbose.error("with", Some(&error), None);
    settle().await;

    let records = store.records(MODEL).await;
    assert_eq!(records[1].get_str(fields::TRACE), Some("frame 1"));
}

#[tokio::test]
async fn test_extras_carried_unless_reserved() {
    let store = MemoryStore::new();
    let logger = Logger::new(options(Level::Trace), store.clone()).unwrap();

    let extras = Record::new()
        .with("module", "billing")
        .with(fields::TEXT, "spoofed");
    logger.info("real", None, Some(extras));
    settle().await;

    let records = store.records(MODEL).await;
    assert_eq!(records[0].get_str("module"), Some("billing"));
    assert_eq!(records[0].get_str(fields::TEXT), Some("real"));
}

#[tokio::test]
async fn test_submission_failure_is_invisible_to_caller() {
    let store = MemoryStore::new();
    store.fail_submissions(true).await;

    let logger = Logger::new(options(Level::Trace).warning(true), store.clone()).unwrap();
    logger.fatal("lost", None, None);
    settle().await;

    // Nothing stored, nothing raised; the follow-up call still works once
    // the store recovers.
    assert_eq!(store.stored(MODEL).await, 0);

    store.fail_submissions(false).await;
    logger.fatal("kept", None, None);
    settle().await;
    assert_eq!(store.stored(MODEL).await, 1);
}

#[tokio::test]
async fn test_shared_use_across_tasks() {
    let store = MemoryStore::new();
    let logger = Arc::new(Logger::new(options(Level::Trace), store.clone()).unwrap());

    let mut handles = Vec::new();
    for i in 0..8 {
        let logger = logger.clone();
        handles.push(tokio::spawn(async move {
            logger.info(&format!("task {i}"), None, None);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    settle().await;

    assert_eq!(store.stored(MODEL).await, 8);
}
