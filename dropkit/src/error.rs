//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was not valid JSON or did not match the schema.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("Failed to read configuration '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `maxSelections` was set to zero, which would make every selection a no-op.
    #[error("maxSelections must be at least 1")]
    ZeroMaxSelections,
}
