//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use modsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModsmithError, ModsmithResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModsmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ModsmithResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ModsmithResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy");
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound if !from.exists() => ApplicationError::TextureNotFound {
                    path: from.to_path_buf(),
                }
                .into(),
                _ => map_io_error(to, e, "copy file"),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModsmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
