//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading scripts or materializing a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A texture named by a block or item does not exist.
    #[error("texture file not found: {}", path.display())]
    TextureNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory store access failed (lock poisoned).
    #[error("Filesystem store lock poisoned")]
    StoreLockError,

    /// The mod script does not exist.
    #[error("mod script not found: {}", path.display())]
    ScriptNotFound { path: PathBuf },

    /// The mod script exists but could not be understood.
    #[error("invalid mod script {}: {reason}", path.display())]
    ScriptError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TextureNotFound { path } => vec![
                format!("Expected a texture at {}", path.display()),
                "Relative texture paths are resolved against the script's directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["This is a bug in Modsmith, please report it".into()],
            Self::ScriptNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Pass the path to a .toml mod script".into(),
            ],
            Self::ScriptError { .. } => vec![
                "A script needs a [mod] table with name, id and minecraft".into(),
                "Blocks and items go in [[blocks]] and [[items]] tables".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TextureNotFound { .. } | Self::ScriptNotFound { .. } => ErrorCategory::NotFound,
            Self::ScriptError { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
