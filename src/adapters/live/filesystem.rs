//! Live filesystem adapter using `std::fs` and the `glob` crate.

use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::ports::filesystem::{FileSystem, FsError};

/// Glob options shared by the live and in-memory adapters: `*` stops at
/// separators and skips dotfiles, the way shell globs do.
pub const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FsError> {
        let mut matches: Vec<PathBuf> = glob::glob_with(pattern, GLOB_OPTIONS)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().display(),
                        error = %e.error(),
                        "skipping unreadable glob entry"
                    );
                    None
                }
            })
            .filter(|p| p.is_file())
            .collect();
        matches.sort();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_parents_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/report.md");
        LiveFileSystem.write(&path, "# Report\n").unwrap();
        assert!(LiveFileSystem.exists(&path));
        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "# Report\n");
    }

    #[test]
    fn glob_returns_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src/sub.py")).unwrap();
        std::fs::write(dir.path().join("src/b.py"), "b").unwrap();
        std::fs::write(dir.path().join("src/a.py"), "a").unwrap();
        std::fs::write(dir.path().join("src/.hidden.py"), "h").unwrap();
        std::fs::write(dir.path().join("src/notes.md"), "n").unwrap();

        let pattern = format!("{}/src/*.py", glob::Pattern::escape(&dir.path().to_string_lossy()));
        let found = LiveFileSystem.glob(&pattern).unwrap();
        assert_eq!(found, vec![dir.path().join("src/a.py"), dir.path().join("src/b.py")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_does_not_hide_other_matches() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("open")).unwrap();
        std::fs::create_dir_all(dir.path().join("locked/inner")).unwrap();
        std::fs::write(dir.path().join("open/a.py"), "a").unwrap();
        std::fs::write(dir.path().join("locked/inner/b.py"), "b").unwrap();
        let locked = dir.path().join("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let pattern = format!("{}/*/*.py", glob::Pattern::escape(&dir.path().to_string_lossy()));
        let found = LiveFileSystem.glob(&pattern);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(found.unwrap(), vec![dir.path().join("open/a.py")]);
    }

    #[test]
    fn malformed_glob_is_an_error() {
        assert!(LiveFileSystem.glob("[").is_err());
    }

    #[test]
    fn reading_a_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(LiveFileSystem.read_to_string(dir.path()).is_err());
    }
}
