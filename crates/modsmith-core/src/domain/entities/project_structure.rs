use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Ordered write plan for one rendered project.
///
/// This is the output of planning and the input of materialization. Entries
/// are applied in insertion order, so directories are listed before the
/// files that live in them. Every entry path is relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_binary(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.entries.push(FsEntry::Binary(BinaryToWrite {
            path: path.into(),
            bytes,
        }));
    }

    /// `source` is a caller path and may be absolute; `destination` may not.
    pub fn add_copy(&mut self, source: impl Into<PathBuf>, destination: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Copy(FileToCopy {
            source: source.into(),
            destination: destination.into(),
        }));
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content.into());
        self
    }

    pub fn with_copy(
        mut self,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        self.add_copy(source, destination);
        self
    }

    /// Reject duplicate or absolute destination paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn copies(&self) -> impl Iterator<Item = &FileToCopy> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Copy(c) => Some(c),
            _ => None,
        })
    }

    /// Text file content by relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    Directory(DirectoryToCreate),
    File(FileToWrite),
    Binary(BinaryToWrite),
    Copy(FileToCopy),
}

impl FsEntry {
    /// Path this entry creates, relative to the project root.
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(d) => &d.path,
            Self::File(f) => &f.path,
            Self::Binary(b) => &b.path,
            Self::Copy(c) => &c.destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryToWrite {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let structure = ProjectStructure::new("/tmp/out")
            .with_directory("src")
            .with_file("src/A.java", "class A {}")
            .with_copy("/art/a.png", "textures/item/a_item.png");

        let paths: Vec<_> = structure.entries().iter().map(FsEntry::path).collect();
        assert_eq!(
            paths,
            [
                Path::new("src"),
                Path::new("src/A.java"),
                Path::new("textures/item/a_item.png")
            ]
        );
        assert_eq!(structure.directories().count(), 1);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.copies().count(), 1);
        assert_eq!(structure.file("src/A.java"), Some("class A {}"));
    }

    #[test]
    fn rejects_duplicate_destinations() {
        let structure = ProjectStructure::new("/tmp/out")
            .with_copy("a.png", "textures/item/a_item.png")
            .with_copy("other/a.png", "textures/item/a_item.png");

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn copy_source_may_be_absolute_but_destination_may_not() {
        let ok = ProjectStructure::new("/tmp/out").with_copy("/art/a.png", "a.png");
        assert!(ok.validate().is_ok());

        let bad = ProjectStructure::new("/tmp/out").with_file("/etc/passwd", "");
        assert!(matches!(
            bad.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
