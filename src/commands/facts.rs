//! `docdrift facts` command.

use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::facts::{Extractor, FactSet};

/// Execute the `facts` command: print the facts extracted from `path` as JSON.
///
/// # Errors
///
/// Returns an error if the config or input cannot be loaded.
pub fn run(ctx: &ServiceContext, path: &Path, config: Option<&Path>) -> Result<()> {
    let facts = extract_file(ctx, path, config)?;
    println!("{}", super::to_json(&facts)?);
    Ok(())
}

/// Extracts facts from one file under the given (or default) configuration.
///
/// # Errors
///
/// Returns an error if the config or input cannot be loaded.
pub fn extract_file(ctx: &ServiceContext, path: &Path, config: Option<&Path>) -> Result<FactSet> {
    let config = AnalyzerConfig::load_or_default(ctx, config)?;
    let extractor = Extractor::new(&config.rules)?;
    Ok(extractor.extract(&super::read_input(ctx, path)?))
}
