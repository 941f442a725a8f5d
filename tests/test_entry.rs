use parking_lot::Mutex;
use rask_log_facade::{EngineError, Field, FieldValue, LogEngine, LogFacade, Severity, logf};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every emit and counts flushes. The integration-test counterpart of
/// the mock engine used by the unit tests.
#[derive(Default)]
struct RecordingEngine {
    records: Mutex<Vec<(Severity, String, Vec<Field>)>>,
    flushes: AtomicUsize,
}

impl RecordingEngine {
    fn record(&self, severity: Severity, message: &str, fields: &[Field]) {
        self.records
            .lock()
            .push((severity, message.to_string(), fields.to_vec()));
    }

    fn records(&self) -> Vec<(Severity, String, Vec<Field>)> {
        self.records.lock().clone()
    }

    fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl LogEngine for RecordingEngine {
    fn debug(&self, message: &str, fields: &[Field]) {
        self.record(Severity::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[Field]) {
        self.record(Severity::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        self.record(Severity::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        self.record(Severity::Error, message, fields);
    }

    fn flush(&self) -> Result<(), EngineError> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn fixture() -> (Arc<RecordingEngine>, LogFacade) {
    let engine = Arc::new(RecordingEngine::default());
    let facade = LogFacade::new(engine.clone());
    (engine, facade)
}

fn field<'a>(fields: &'a [Field], key: &str) -> &'a FieldValue {
    &fields
        .iter()
        .find(|f| f.key == key)
        .unwrap_or_else(|| panic!("missing field {key}"))
        .value
}

#[test]
fn chained_entry_reaches_engine_with_all_fields() {
    let (engine, facade) = fixture();

    facade
        .debug()
        .string("user", "alice")
        .int("attempts", 3)
        .log("login failed");

    let records = engine.records();
    assert_eq!(records.len(), 1);

    let (severity, message, fields) = &records[0];
    assert_eq!(*severity, Severity::Debug);
    assert_eq!(message, "login failed");
    assert_eq!(fields.len(), 2);
    assert_eq!(*field(fields, "user"), FieldValue::Str("alice".into()));
    assert_eq!(*field(fields, "attempts"), FieldValue::Int(3));

    assert_eq!(engine.flushes(), 1);
}

#[test]
fn every_emission_flushes_exactly_once_regardless_of_field_count() {
    let (engine, facade) = fixture();

    for n in 0..6u64 {
        let mut entry = facade.info();
        for i in 0..n {
            entry = entry.uint(format!("f{i}"), i);
        }
        entry.log("sized");
        assert_eq!(engine.flushes(), (n + 1) as usize);
    }

    assert_eq!(engine.records().len(), 6);
}

#[test]
fn logf_matches_preformatted_log() {
    let (engine, facade) = fixture();

    facade.info().log("x: y");
    logf!(facade.info(), "x: {}", "y");

    let records = engine.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}

#[test]
fn logf_supports_positional_and_named_arguments() {
    let (engine, facade) = fixture();

    let attempts = 3;
    logf!(facade.warn(), "user {} failed {attempts} times", "alice");

    let records = engine.records();
    assert_eq!(records[0].1, "user alice failed 3 times");
}

#[test]
fn err_with_source_populates_error_field() {
    let (engine, facade) = fixture();

    let source = io::Error::new(io::ErrorKind::ConnectionReset, "peer reset");
    facade.error().err(Some(&source)).log("request aborted");

    let records = engine.records();
    let fields = &records[0].2;
    assert_eq!(
        *field(fields, "error"),
        FieldValue::Error(Some("peer reset".into()))
    );
}

#[test]
fn err_without_source_still_populates_error_field() {
    let (engine, facade) = fixture();

    facade.error().err(None).log("nothing actually broke");

    let records = engine.records();
    assert_eq!(*field(&records[0].2, "error"), FieldValue::Error(None));
}

#[test]
fn later_setter_overwrites_earlier_value_for_same_key() {
    let (engine, facade) = fixture();

    facade
        .info()
        .string("status", "pending")
        .string("status", "done")
        .bool("status", true)
        .log("state change");

    let records = engine.records();
    let fields = &records[0].2;
    assert_eq!(fields.len(), 1);
    assert_eq!(*field(fields, "status"), FieldValue::Bool(true));
}

#[test]
fn flush_error_never_escapes_log() {
    struct BrokenFlush;

    impl LogEngine for BrokenFlush {
        fn debug(&self, _message: &str, _fields: &[Field]) {}
        fn info(&self, _message: &str, _fields: &[Field]) {}
        fn warn(&self, _message: &str, _fields: &[Field]) {}
        fn error(&self, _message: &str, _fields: &[Field]) {}

        fn flush(&self) -> Result<(), EngineError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone").into())
        }
    }

    // `log` returns unit; reaching the next line is the assertion.
    LogFacade::new(Arc::new(BrokenFlush)).info().log("best effort");
}

// Single-use contract: `log`/`log_fmt` consume the entry, so re-emission or
// post-emission setter calls are compile errors, not runtime behavior. The
// rejected program lives in the `compile_fail` doctest on `facade::Entry`.
#[test]
fn entry_is_consumed_by_emission() {
    let (engine, facade) = fixture();

    let entry = facade.info().string("user", "alice");
    entry.log("first and only");

    assert_eq!(engine.records().len(), 1);
    assert_eq!(engine.flushes(), 1);
}
