use super::{EngineError, LogEngine};
use crate::domain::Field;

/// Bridge engine that re-emits records as `tracing` events.
///
/// `tracing` requires field names to be known at compile time, so accumulated
/// fields are rendered into a single space-joined `fields` attribute. Flush
/// is a no-op: buffering belongs to the installed subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEngine;

fn render_fields(fields: &[Field]) -> String {
    let mut rendered: Vec<String> = fields
        .iter()
        .map(|field| format!("{}={}", field.key, field.value))
        .collect();
    // Field list order is unspecified; sort for stable output.
    rendered.sort();
    rendered.join(" ")
}

impl LogEngine for TracingEngine {
    fn debug(&self, message: &str, fields: &[Field]) {
        tracing::debug!(fields = %render_fields(fields), "{}", message);
    }

    fn info(&self, message: &str, fields: &[Field]) {
        tracing::info!(fields = %render_fields(fields), "{}", message);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        tracing::warn!(fields = %render_fields(fields), "{}", message);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        tracing::error!(fields = %render_fields(fields), "{}", message);
    }

    fn flush(&self) -> Result<(), EngineError> {
        Ok(())
    }
}
