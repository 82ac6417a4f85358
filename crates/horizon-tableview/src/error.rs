//! Error types for Horizon TableView.
//!
//! Table view queries never fail: missing rows and unregistered cell types
//! degrade to empty results. Errors only arise when loading configuration.

use std::path::PathBuf;

/// Result type alias for table view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a table view.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be read.
    #[error("Failed to read table view config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for a `TableViewConfig`.
    #[error("Invalid table view config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
