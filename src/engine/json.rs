use super::{EngineError, LogEngine};
use crate::domain::{Field, Severity};
use chrono::Utc;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// JSON-lines engine: one compact object per record.
///
/// Record shape is `{"ts": ..., "level": ..., "msg": ..., <fields>...}` with
/// an RFC 3339 timestamp. Records below `min_level` are dropped. Write
/// failures during emit are dropped too; only `flush` reports errors, and the
/// facade discards those as well.
pub struct JsonEngine<W: Write> {
    writer: Mutex<W>,
    min_level: Severity,
}

impl<W: Write> JsonEngine<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: Severity::Debug,
        }
    }

    /// Drop records below `level` at the engine.
    #[must_use]
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    /// Recover the writer, e.g. to inspect captured output in tests.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn emit(&self, severity: Severity, message: &str, fields: &[Field]) {
        if severity < self.min_level {
            return;
        }

        let mut record = serde_json::Map::new();
        record.insert("ts".into(), serde_json::json!(Utc::now().to_rfc3339()));
        record.insert("level".into(), serde_json::json!(severity.as_str()));
        record.insert("msg".into(), serde_json::json!(message));
        for field in fields {
            let value = serde_json::to_value(&field.value).unwrap_or(serde_json::Value::Null);
            record.insert(field.key.clone(), value);
        }

        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", serde_json::Value::Object(record));
    }
}

impl JsonEngine<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonEngine<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl JsonEngine<File> {
    /// Open (or create) `path` in append mode.
    pub fn file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> LogEngine for JsonEngine<W> {
    fn debug(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        self.emit(Severity::Error, message, fields);
    }

    fn flush(&self) -> Result<(), EngineError> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
