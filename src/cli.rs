//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `docdrift`.
#[derive(Debug, Parser)]
#[command(
    name = "docdrift",
    version,
    about = "Detect documentation that has drifted from its sources"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze every manifest entry and report stale pages.
    Analyze(AnalyzeArgs),
    /// Print the facts extracted from a single file as JSON.
    Facts {
        /// File to extract facts from.
        path: PathBuf,
        /// Analyzer configuration file (YAML).
        #[arg(long, env = "DOCDRIFT_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Compare a source file against a documentation page and print the drift report.
    Compare {
        /// Source-of-truth file.
        source: PathBuf,
        /// Documentation page.
        doc: PathBuf,
        /// Analyzer configuration file (YAML).
        #[arg(long, env = "DOCDRIFT_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the default analyzer configuration as YAML.
    Rules,
}

/// Arguments for `docdrift analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Manifest mapping documentation pages to sources (JSON, or YAML by extension).
    #[arg(long, env = "DOCDRIFT_MANIFEST")]
    pub manifest: PathBuf,
    /// Directory holding one checkout per source repository.
    #[arg(long, env = "DOCDRIFT_REPOS_DIR")]
    pub repos_dir: PathBuf,
    /// Root directory of the documentation pages.
    #[arg(long, env = "DOCDRIFT_DOCS_DIR", default_value = "docs")]
    pub docs_dir: PathBuf,
    /// Write the full results as JSON to this file.
    #[arg(long)]
    pub json_output: Option<PathBuf>,
    /// Write a markdown report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Analyzer configuration file (YAML).
    #[arg(long, env = "DOCDRIFT_CONFIG")]
    pub config: Option<PathBuf>,
    /// Exit with an error when any page is stale.
    #[arg(long)]
    pub fail_on_stale: bool,
}
