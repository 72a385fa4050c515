//! `docdrift rules` command.

use crate::config::AnalyzerConfig;
use crate::error::Result;

/// Print the default analyzer configuration as YAML, ready to be edited
/// and passed back with `--config`.
///
/// # Errors
///
/// Returns an error if YAML encoding fails.
pub fn run() -> Result<()> {
    print!("{}", AnalyzerConfig::default().to_yaml()?);
    Ok(())
}
