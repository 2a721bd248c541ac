//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Extraction, rendering and navigation never fail; these variants only cover
/// the edges that touch the outside world (files, config text).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Reading a source or config file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Source file type the loader does not know how to classify
    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing file, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::UnsupportedSource(_) => true,
            Self::Io(_) | Self::Serialization(_) => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
