//! Error types for theme package management

use thiserror::Error;

/// Result type alias for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors surfaced by theme install, uninstall and update operations.
///
/// Collaborator failures propagate as-is; there are no retries and no
/// local recovery.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Package installer resolution, fetch or removal failure
    #[error("Installer error: {message}")]
    Installer { message: String },

    /// No registry record exists for the identifier
    #[error("Theme not installed: {0}")]
    NotInstalled(String),

    /// I/O errors during manifest or registry access
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("JSON parsing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Semver parsing errors
    #[error("Version parsing error: {source}")]
    Semver {
        #[from]
        source: semver::Error,
    },

    /// Registry-file persistence errors
    #[error(transparent)]
    Storage(#[from] themepack_storage::StorageError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ThemeError {
    /// Create a new installer error
    pub fn installer<S: Into<String>>(message: S) -> Self {
        Self::Installer {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
