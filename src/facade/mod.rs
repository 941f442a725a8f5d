//! Logger facade: severity entry points over a shared engine handle.
//!
//! `LogFacade` owns an `Arc<dyn LogEngine>` and an optional baseline field
//! set. Each severity method returns a fresh [`Entry`] pre-seeded with the
//! baseline; nothing touches the engine until the entry's terminal call.

pub mod entry;

pub use entry::Entry;

use crate::config::{FacadeConfig, OutputTarget};
use crate::domain::{FacadeError, FieldMap, FieldValue, Severity};
use crate::engine::{JsonEngine, LogEngine};
use std::sync::Arc;

/// Process-level entry point for structured logging.
///
/// Cheap to clone conceptually (the engine handle is shared), but typically
/// constructed once and borrowed. Entry production is infallible and
/// side-effect free; only construction can fail.
pub struct LogFacade {
    engine: Arc<dyn LogEngine>,
    baseline: FieldMap,
}

impl LogFacade {
    /// Wrap an existing engine with an empty baseline.
    pub fn new(engine: Arc<dyn LogEngine>) -> Self {
        Self {
            engine,
            baseline: FieldMap::new(),
        }
    }

    /// Build a facade from configuration.
    ///
    /// The only fallible path: opening a file-backed output can fail, which
    /// surfaces as [`FacadeError::Init`].
    pub fn from_config(config: &FacadeConfig) -> Result<Self, FacadeError> {
        let engine: Arc<dyn LogEngine> = match &config.output {
            OutputTarget::Stdout => Arc::new(JsonEngine::stdout().with_min_level(config.level)),
            OutputTarget::Stderr => Arc::new(JsonEngine::stderr().with_min_level(config.level)),
            OutputTarget::File { path } => Arc::new(
                JsonEngine::file(path)
                    .map_err(|e| FacadeError::Init(format!("cannot open {}: {e}", path.display())))?
                    .with_min_level(config.level),
            ),
        };

        let mut facade = Self::new(engine);
        for (key, value) in &config.fields {
            facade = facade.with_field(key.clone(), FieldValue::Str(value.clone()));
        }
        Ok(facade)
    }

    /// Add a baseline field seeded into every entry this facade produces.
    /// Per-entry setters may overwrite it.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.baseline.insert(key.into(), value);
        self
    }

    fn entry(&self, severity: Severity) -> Entry {
        Entry::new(Arc::clone(&self.engine), severity, self.baseline.clone())
    }

    #[must_use]
    pub fn debug(&self) -> Entry {
        self.entry(Severity::Debug)
    }

    #[must_use]
    pub fn info(&self) -> Entry {
        self.entry(Severity::Info)
    }

    #[must_use]
    pub fn warn(&self) -> Entry {
        self.entry(Severity::Warn)
    }

    #[must_use]
    pub fn error(&self) -> Entry {
        self.entry(Severity::Error)
    }

    /// Critical is an alias: the produced entry carries `Severity::Error`.
    /// No engine has a distinct critical level.
    #[must_use]
    pub fn critical(&self) -> Entry {
        self.entry(Severity::Error)
    }
}
