//! Error types for fatal `docdrift` failures.
//!
//! Per-entry problems (a missing page, a missing source) are never errors:
//! they are recorded as data on the run summary. Only failures that leave
//! nothing to analyze surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for `docdrift` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate a run before or outside per-entry processing.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest file could not be read.
    #[error("failed to read manifest {}: {message}", path.display())]
    ManifestRead {
        /// Manifest location.
        path: PathBuf,
        /// Description of the read failure.
        message: String,
    },

    /// The manifest file was read but is not a valid manifest document.
    #[error("failed to parse manifest {}: {message}", path.display())]
    ManifestParse {
        /// Manifest location.
        path: PathBuf,
        /// Description of the parse failure.
        message: String,
    },

    /// The repository root holding source checkouts does not exist.
    #[error("repository root does not exist: {}", .0.display())]
    RepoRootMissing(PathBuf),

    /// The documentation root does not exist.
    #[error("documentation root does not exist: {}", .0.display())]
    DocRootMissing(PathBuf),

    /// A configuration file could not be loaded.
    #[error("failed to load config {}: {message}", path.display())]
    Config {
        /// Config file location.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// A configured extraction pattern is not a valid regular expression.
    #[error("invalid extraction pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// An input file named on the command line could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Read {
        /// File location.
        path: PathBuf,
        /// Description of the read failure.
        message: String,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {message}", path.display())]
    Write {
        /// File location.
        path: PathBuf,
        /// Description of the write failure.
        message: String,
    },

    /// Results could not be serialized.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// Command-line arguments were rejected, or help/version was requested.
    #[error("{0}")]
    Usage(String),

    /// The run completed but stale pages were found and the caller asked to fail on them.
    #[error("{count} stale documentation page{} found", if *count == 1 { "" } else { "s" })]
    StaleFound {
        /// Number of stale pages.
        count: usize,
    },
}
