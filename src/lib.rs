//! Chainable entry-builder facade over an injected structured-logging engine.
//!
//! A [`LogFacade`] hands out single-use [`Entry`] builders, one per severity.
//! Fields accumulate on the entry through typed setters; the terminal
//! [`Entry::log`] call dispatches the record to the underlying [`LogEngine`]
//! and forces a flush. The engine is a trait object, so the facade never
//! depends on a concrete sink; [`JsonEngine`] and [`TracingEngine`] are the
//! two adapters shipped in-crate.

#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. EngineError in engine module
    clippy::must_use_candidate       // Annotated selectively on builder APIs
)]

pub mod config;
pub mod domain;
pub mod engine;
pub mod facade;

// Re-export main types for easy access
pub use config::{FacadeConfig, OutputTarget};
pub use domain::{FacadeError, Field, FieldMap, FieldValue, Severity};
pub use engine::{EngineError, JsonEngine, LogEngine, TracingEngine};
pub use facade::{Entry, LogFacade};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
