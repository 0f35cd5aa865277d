//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for lexiscan operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at I/O boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when an input file cannot be acquired.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No file at the expected path.
    #[error("Input file not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {error}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, error }
        }
    }
}

/// Error returned when a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Anchor token must not be empty")]
    EmptyAnchor,
    #[error("Tracked token names must not be empty")]
    EmptyTracked,
    #[error("Anchor token '{0}' must not also be tracked")]
    AnchorTracked(String),
    #[error("Limit '{0}' must be greater than zero")]
    ZeroLimit(&'static str),
}
