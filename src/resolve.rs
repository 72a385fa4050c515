//! Source resolution: turns declared `{repo, path}` references into text.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::manifest::SourceRef;
use crate::ports::filesystem::FileSystem;

/// Separator appended after every file read into a bundle.
const FILE_SEPARATOR: &str = "\n\n";

/// Bounds on how much source text one reference may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverLimits {
    /// Maximum number of files read for one wildcard reference.
    pub max_glob_matches: usize,
}

impl Default for ResolverLimits {
    fn default() -> Self {
        Self { max_glob_matches: 5 }
    }
}

/// Aggregated text for all of an entry's source references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBundle {
    /// Concatenated file contents in declaration order.
    pub text: String,
    /// Number of references that resolved to at least one file.
    pub found: usize,
    /// Labels (`repo/path`) of references that resolved to nothing.
    pub missing: Vec<String>,
    /// Files actually read, in read order.
    pub files: Vec<PathBuf>,
}

impl SourceBundle {
    /// Whether no reference produced any content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found == 0
    }

    /// Whether some, but not all, references were missing.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.found > 0 && !self.missing.is_empty()
    }
}

/// Resolves source references against a repository root.
pub struct SourceResolver<'a> {
    fs: &'a dyn FileSystem,
    repo_root: &'a Path,
    limits: ResolverLimits,
}

impl<'a> SourceResolver<'a> {
    /// Creates a resolver over `repo_root`, which holds one directory per repo.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, repo_root: &'a Path, limits: ResolverLimits) -> Self {
        Self { fs, repo_root, limits }
    }

    /// Resolves every reference independently and concatenates the results
    /// in declaration order. Missing references are recorded, never fatal.
    #[must_use]
    pub fn resolve_all(&self, sources: &[SourceRef]) -> SourceBundle {
        let mut bundle = SourceBundle::default();
        for source in sources {
            let files = self.resolve(source);
            if files.is_empty() {
                tracing::debug!(source = %source, "source reference matched nothing");
                bundle.missing.push(source.to_string());
                continue;
            }
            bundle.found += 1;
            for (path, text) in files {
                bundle.text.push_str(&text);
                bundle.text.push_str(FILE_SEPARATOR);
                bundle.files.push(path);
            }
        }
        bundle
    }

    /// Resolves one reference to the `(path, text)` of every readable file it names.
    ///
    /// Paths are relative to the repository directory even when written with
    /// a leading `/`. Wildcard paths are globbed (at most `max_glob_matches`
    /// files, in path order); literal paths are read directly.
    #[must_use]
    pub fn resolve(&self, source: &SourceRef) -> Vec<(PathBuf, String)> {
        let repo_dir = self.repo_root.join(&source.repo);
        let relative = source.path.trim_start_matches('/');
        if !source.is_wildcard() {
            return self.read(repo_dir.join(relative)).into_iter().collect();
        }

        let pattern =
            format!("{}/{relative}", glob::Pattern::escape(&repo_dir.to_string_lossy()));
        let matches = match self.fs.glob(&pattern) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "invalid source pattern");
                return Vec::new();
            }
        };
        matches
            .into_iter()
            .take(self.limits.max_glob_matches)
            .filter_map(|path| self.read(path))
            .collect()
    }

    fn read(&self, path: PathBuf) -> Option<(PathBuf, String)> {
        match self.fs.read_to_string(&path) {
            Ok(text) => Some((path, text)),
            Err(e) => {
                if self.fs.exists(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "source file is unreadable");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn source(repo: &str, path: &str) -> SourceRef {
        SourceRef { repo: repo.to_string(), path: path.to_string() }
    }

    fn repos() -> MemoryFileSystem {
        let mut fs = MemoryFileSystem::new()
            .with_file("/repos/core/README.md", "readme")
            .with_file("/repos/core/config.yaml", "config");
        for i in 0..7 {
            fs = fs.with_file(format!("/repos/tools/src/tool_{i}.py"), format!("tool {i}"));
        }
        fs
    }

    #[test]
    fn literal_paths_concatenate_in_declaration_order() {
        let fs = repos();
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());
        let bundle =
            resolver.resolve_all(&[source("core", "config.yaml"), source("core", "README.md")]);
        assert_eq!(bundle.text, "config\n\nreadme\n\n");
        assert_eq!(bundle.found, 2);
        assert!(bundle.missing.is_empty());
        assert!(!bundle.is_partial());
    }

    #[test]
    fn wildcard_reads_at_most_the_limit() {
        let fs = repos();
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());
        let bundle = resolver.resolve_all(&[source("tools", "src/*.py")]);
        assert_eq!(bundle.found, 1);
        assert_eq!(bundle.files.len(), 5);
        assert!(bundle.text.starts_with("tool 0\n\ntool 1"));
        assert!(!bundle.text.contains("tool 5"));
    }

    #[test]
    fn wildcard_limit_is_configurable() {
        let fs = repos();
        let limits = ResolverLimits { max_glob_matches: 2 };
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), limits);
        assert_eq!(resolver.resolve(&source("tools", "src/*.py")).len(), 2);
    }

    #[test]
    fn leading_slash_stays_inside_the_repo() {
        let fs = repos().with_file("/README.md", "outside");
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());

        let literal = resolver.resolve(&source("core", "/README.md"));
        assert_eq!(literal, vec![(PathBuf::from("/repos/core/README.md"), "readme".to_string())]);

        let wildcard = resolver.resolve(&source("core", "/*.md"));
        assert_eq!(wildcard, literal);
    }

    #[test]
    fn absolute_path_outside_the_repo_is_missing() {
        let fs = repos().with_file("/etc/secret.md", "secret");
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());
        let bundle = resolver.resolve_all(&[source("core", "/etc/secret.md")]);
        assert!(bundle.is_empty());
        assert_eq!(bundle.missing, vec!["core//etc/secret.md"]);
    }

    #[test]
    fn partial_misses_are_recorded() {
        let fs = repos();
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());
        let bundle = resolver.resolve_all(&[
            source("core", "README.md"),
            source("core", "CHANGELOG.md"),
            source("tools", "lib/*.py"),
        ]);
        assert_eq!(bundle.found, 1);
        assert_eq!(bundle.missing, vec!["core/CHANGELOG.md", "tools/lib/*.py"]);
        assert!(bundle.is_partial());
        assert!(!bundle.is_empty());
    }

    #[test]
    fn all_missing_is_empty() {
        let fs = repos();
        let resolver = SourceResolver::new(&fs, Path::new("/repos"), ResolverLimits::default());
        let bundle = resolver.resolve_all(&[source("absent", "README.md")]);
        assert!(bundle.is_empty());
        assert!(bundle.text.is_empty());
        assert_eq!(bundle.missing, vec!["absent/README.md"]);
    }
}
