use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not valid JSON for the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value was not a JSON object
    #[error("{}: expected a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}
