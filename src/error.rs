//! Error handling types and utilities.

use crate::catalog::RecipeId;
use std::path::PathBuf;

/// A specialized Result type for start-up and server code.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods. Library types below are returned where callers
/// need to match on the failure.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the recipe catalog fails.
///
/// Every variant is fatal at start-up: a malformed catalog is never loaded
/// partially.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog is not valid JSON or a record is missing a required field.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share the same id.
    #[error("duplicate recipe id {0}")]
    DuplicateId(RecipeId),
}

/// Error returned when loading the engine configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
