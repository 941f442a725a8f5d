use thiserror::Error;

/// Errors that can cross the facade boundary.
///
/// Only construction can fail. Once an entry exists, emission is best-effort:
/// flush failures are swallowed and nothing downstream of entry production
/// returns an error.
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Engine initialization failed: {0}")]
    Init(String),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
