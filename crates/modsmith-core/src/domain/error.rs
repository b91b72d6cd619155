// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::compatibility::VALID_VERSIONS;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unsupported Minecraft version '{version}'")]
    UnsupportedVersion { version: String },

    #[error("missing required field '{field}'")]
    MissingRequiredField { field: &'static str },

    #[error("invalid version string '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("entity '{id}' is a {found} but was listed as a {expected}")]
    EntityKindMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Consistency Errors
    // ========================================================================
    /// A version passed validation but is missing from a compatibility table.
    /// Unreachable while the tables and `VALID_VERSIONS` stay in sync.
    #[error("no {table} version is registered for Minecraft {version}")]
    UnresolvedDependency { table: &'static str, version: String },

    #[error("failed to serialize {artifact}: {reason}")]
    Serialization { artifact: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedVersion { version } => vec![
                format!("'{}' is not a supported Minecraft version", version),
                format!(
                    "Supported versions: {} through {}",
                    VALID_VERSIONS.first().copied().unwrap_or_default(),
                    VALID_VERSIONS.last().copied().unwrap_or_default()
                ),
                "Run 'modsmith versions' to see the full list".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Set '{}' in the [mod] table", field),
            ],
            Self::InvalidVersion { .. } => vec![
                "Versions are dot-separated numbers, e.g. 1.20.4".into(),
            ],
            Self::EntityKindMismatch { id, expected, .. } => vec![
                format!("Move '{}' into the [[{}s]] list", id, expected),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two entities produce the same file: {}", path),
                "Give every block and item a distinct id".into(),
            ],
            Self::UnresolvedDependency { .. } => vec![
                "The compatibility tables are out of sync".into(),
                "This is a bug in Modsmith, please report it".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "This is a bug in Modsmith, please report it".into(),
            ],
            Self::Serialization { artifact, .. } => vec![
                format!("Modsmith could not write {}", artifact),
                "This is a bug in Modsmith, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedVersion { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidVersion { .. }
            | Self::EntityKindMismatch { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::UnresolvedDependency { .. }
            | Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_name_the_offender() {
        let absolute = DomainError::AbsolutePathNotAllowed {
            path: "/etc/passwd".into(),
        };
        assert!(absolute.suggestions()[0].contains("/etc/passwd"));
        assert_eq!(absolute.category(), ErrorCategory::Internal);

        let serialization = DomainError::Serialization {
            artifact: "fabric.mod.json".into(),
            reason: "boom".into(),
        };
        assert!(serialization.suggestions()[0].contains("fabric.mod.json"));
        assert_eq!(serialization.category(), ErrorCategory::Internal);
    }

    #[test]
    fn unsupported_version_lists_range() {
        let err = DomainError::UnsupportedVersion {
            version: "1.12.2".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.starts_with("Supported versions: ")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
