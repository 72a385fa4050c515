//! In-memory filesystem for tests and dry runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use glob::Pattern;

use crate::adapters::live::filesystem::GLOB_OPTIONS;
use crate::ports::filesystem::{FileSystem, FsError};

/// A filesystem whose files live in a map keyed by absolute path.
///
/// Directories exist implicitly as ancestors of stored files.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, returning `self` for chaining.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), contents.into());
        self
    }

    /// Returns the contents of a stored file, if present.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap_or_else(PoisonError::into_inner).get(path).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        self.contents(path).ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .any(|f| f.starts_with(path))
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FsError> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .filter(|path| pattern.matches_path_with(path, GLOB_OPTIONS))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs() -> MemoryFileSystem {
        MemoryFileSystem::new()
            .with_file("/repos/core/README.md", "# Core")
            .with_file("/repos/core/src/b.py", "b")
            .with_file("/repos/core/src/a.py", "a")
            .with_file("/repos/core/src/deep/c.py", "c")
    }

    #[test]
    fn directories_exist_implicitly() {
        let fs = fs();
        assert!(fs.exists(Path::new("/repos")));
        assert!(fs.exists(Path::new("/repos/core/README.md")));
        assert!(!fs.exists(Path::new("/repos/other")));
        assert!(!fs.exists(Path::new("/repos/co")));
    }

    #[test]
    fn glob_does_not_cross_directories() {
        let found = fs().glob("/repos/core/src/*.py").unwrap();
        assert_eq!(
            found,
            vec![PathBuf::from("/repos/core/src/a.py"), PathBuf::from("/repos/core/src/b.py")]
        );
    }

    #[test]
    fn write_then_read() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/out/summary.json"), "{}").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/out/summary.json")).unwrap(), "{}");
        assert!(fs.read_to_string(Path::new("/out/missing.json")).is_err());
    }
}
