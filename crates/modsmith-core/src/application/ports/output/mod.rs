//! Driven (output) ports - implemented by infrastructure.
//!
//! The `modsmith-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ModsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `modsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed through as given; the renderer joins them onto the
/// output root before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ModsmithResult<()>;

    /// Write `content` to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &[u8]) -> ModsmithResult<()>;

    /// Copy `from` to `to`, replacing `to` if present.
    fn copy_file(&self, from: &Path, to: &Path) -> ModsmithResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
