//! `docdrift compare` command.

use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::context::ServiceContext;
use crate::drift::{compare, DriftReport};
use crate::error::Result;
use crate::facts::Extractor;

/// Execute the `compare` command: print the drift report of `doc` against
/// `source` as JSON.
///
/// # Errors
///
/// Returns an error if the config or either input cannot be loaded.
pub fn run(ctx: &ServiceContext, source: &Path, doc: &Path, config: Option<&Path>) -> Result<()> {
    let report = compare_files(ctx, source, doc, config)?;
    println!("{}", super::to_json(&report)?);
    Ok(())
}

/// Compares two files under the given (or default) configuration.
///
/// # Errors
///
/// Returns an error if the config or either input cannot be loaded.
pub fn compare_files(
    ctx: &ServiceContext,
    source: &Path,
    doc: &Path,
    config: Option<&Path>,
) -> Result<DriftReport> {
    let config = AnalyzerConfig::load_or_default(ctx, config)?;
    let extractor = Extractor::new(&config.rules)?;
    let source_facts = extractor.extract(&super::read_input(ctx, source)?);
    let doc_facts = extractor.extract(&super::read_input(ctx, doc)?);
    Ok(compare(&source_facts, &doc_facts, &config.scoring))
}
