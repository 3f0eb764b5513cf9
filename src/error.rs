//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for the server binary.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` where startup can fail.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a catalog file fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog file is not valid catalog JSON.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two items of the same kind share an id.
    #[error("Duplicate {kind} id {id} in catalog")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Error returned when loading configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}
