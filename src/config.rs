//! Facade configuration: output target, level floor, baseline fields.

use crate::domain::{FacadeError, Severity};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the JSON engine writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File { path: PathBuf },
}

/// Facade construction settings.
///
/// `level` is the engine-side floor (records below it are dropped by the
/// engine, never by the facade). `fields` become baseline string fields
/// seeded into every entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub output: OutputTarget,
    #[serde(deserialize_with = "severity_from_name")]
    pub level: Severity,
    pub fields: HashMap<String, String>,
}

/// Level names never fault the caller: unrecognized names parse as `Info`.
fn severity_from_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Severity, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(Severity::from_name(&name))
}

impl FacadeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FacadeError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&contents)?)
    }
}
