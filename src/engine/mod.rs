//! Underlying engine boundary.
//!
//! The facade delegates actual encoding and writing to a [`LogEngine`] trait
//! object: one emit operation per severity plus a fallible flush. Two
//! adapters ship in-crate — [`JsonEngine`] (JSON lines to any writer) and
//! [`TracingEngine`] (bridge onto the `tracing` ecosystem).

pub mod json;
pub mod tracing;

pub use self::json::JsonEngine;
pub use self::tracing::TracingEngine;

use crate::domain::Field;
use thiserror::Error;

/// Engine-side failures.
///
/// The facade swallows flush errors (telemetry is best-effort); the type
/// exists for engine implementors and for tests that assert the swallowing.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structured-logging engine consumed by the facade.
///
/// Field list order is unspecified. Emit operations return nothing
/// observable; implementations handle their own write failures.
#[cfg_attr(test, mockall::automock)]
pub trait LogEngine: Send + Sync {
    fn debug(&self, message: &str, fields: &[Field]);
    fn info(&self, message: &str, fields: &[Field]);
    fn warn(&self, message: &str, fields: &[Field]);
    fn error(&self, message: &str, fields: &[Field]);

    /// Force buffered records to their destination.
    fn flush(&self) -> Result<(), EngineError>;
}
