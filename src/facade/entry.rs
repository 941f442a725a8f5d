use crate::domain::{Field, FieldMap, FieldValue, Severity};
use crate::engine::LogEngine;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A single in-progress log record.
///
/// Created by one of the facade's severity entry points, mutated through
/// chained typed setters, and consumed by [`Entry::log`] or
/// [`Entry::log_fmt`]. The terminal operations take `self` by value, so an
/// entry cannot be touched again after emission:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use rask_log_facade::{LogFacade, TracingEngine};
///
/// let facade = LogFacade::new(Arc::new(TracingEngine));
/// let entry = facade.info();
/// entry.log("first");
/// entry.log("second"); // error: `entry` was moved by the first `log`
/// ```
pub struct Entry {
    severity: Severity,
    fields: FieldMap,
    engine: Arc<dyn LogEngine>,
}

/// Runs the engine flush when dropped, so it executes exactly once per
/// emission no matter how `log` returns. Flush errors are discarded:
/// emission is best-effort telemetry, not a transactional write.
struct FlushGuard {
    engine: Arc<dyn LogEngine>,
}

impl Drop for FlushGuard {
    fn drop(&mut self) {
        let _ = self.engine.flush();
    }
}

impl Entry {
    pub(crate) fn new(engine: Arc<dyn LogEngine>, severity: Severity, fields: FieldMap) -> Self {
        Self {
            severity,
            fields,
            engine,
        }
    }

    fn set(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, FieldValue::Str(value.into()))
    }

    #[must_use]
    pub fn int(self, key: impl Into<String>, value: i64) -> Self {
        self.set(key, FieldValue::Int(value))
    }

    #[must_use]
    pub fn uint(self, key: impl Into<String>, value: u64) -> Self {
        self.set(key, FieldValue::Uint(value))
    }

    #[must_use]
    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, FieldValue::Bool(value))
    }

    #[must_use]
    pub fn float(self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, FieldValue::Float(value))
    }

    #[must_use]
    pub fn time(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.set(key, FieldValue::Time(value))
    }

    #[must_use]
    pub fn duration(self, key: impl Into<String>, value: Duration) -> Self {
        self.set(key, FieldValue::Duration(value))
    }

    /// Record an error under the fixed key `"error"`.
    ///
    /// The key is written even when `error` is `None`: the absence marker is
    /// part of the record, so readers can distinguish "error setter called
    /// with nothing" from "setter never called".
    #[must_use]
    pub fn err(self, error: Option<&dyn std::error::Error>) -> Self {
        self.set("error", FieldValue::Error(error.map(ToString::to_string)))
    }

    /// Emit the record and flush the engine.
    ///
    /// Fields are handed over as an unordered list. The flush runs exactly
    /// once per emission, via a drop guard, even if the engine's emit panics;
    /// its result is discarded.
    pub fn log(self, message: &str) {
        let _guard = FlushGuard {
            engine: Arc::clone(&self.engine),
        };

        let fields: Vec<Field> = self
            .fields
            .into_iter()
            .map(|(key, value)| Field { key, value })
            .collect();

        match self.severity {
            Severity::Debug => self.engine.debug(message, &fields),
            Severity::Info => self.engine.info(message, &fields),
            Severity::Warn => self.engine.warn(message, &fields),
            Severity::Error => self.engine.error(message, &fields),
        };
    }

    /// Format a message, then emit as [`Entry::log`] would.
    ///
    /// Prefer the [`logf!`](crate::logf) macro for a variadic call site.
    pub fn log_fmt(self, args: fmt::Arguments<'_>) {
        self.log(&args.to_string());
    }
}

/// Format-and-emit shorthand: `logf!(entry, "x: {}", y)` is
/// `entry.log(&format!("x: {}", y))`.
#[macro_export]
macro_rules! logf {
    ($entry:expr, $($arg:tt)*) => {
        $entry.log_fmt(::core::format_args!($($arg)*))
    };
}
