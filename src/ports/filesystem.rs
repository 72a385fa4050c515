//! Filesystem port for reading sources and docs and writing outputs.

use std::path::{Path, PathBuf};

/// Boxed error returned by filesystem operations.
pub type FsError = Box<dyn std::error::Error + Send + Sync>;

/// Provides the file access drift analysis needs.
///
/// Abstracting the filesystem lets the orchestrator run against an
/// in-memory tree in tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, is a directory, or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Writes the given contents to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Returns `true` if the path exists, as either a file or a directory.
    fn exists(&self, path: &Path) -> bool;

    /// Expands a glob pattern into matching regular files, sorted by path.
    ///
    /// `*` never crosses a path separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is malformed.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FsError>;
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        (**self).write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FsError> {
        (**self).glob(pattern)
    }
}
