//! Domain layer for rask-log-facade.
//!
//! Contains the canonical types shared across all modules:
//! - `Field` / `FieldValue` / `FieldMap`: typed field storage
//! - `Severity`: log severity (Debug/Info/Warn/Error)
//! - `FacadeError`: construction-time error type

pub mod error;
pub mod field;
pub mod severity;

pub use error::FacadeError;
pub use field::{Field, FieldMap, FieldValue};
pub use severity::Severity;
