//! Command dispatch and handlers.

pub mod analyze;
pub mod compare;
pub mod facts;
pub mod rules;

use std::path::Path;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<()> {
    dispatch_with_context(command, &ServiceContext::live())
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze::run(ctx, args),
        Command::Facts { path, config } => facts::run(ctx, path, config.as_deref()),
        Command::Compare { source, doc, config } => {
            compare::run(ctx, source, doc, config.as_deref())
        }
        Command::Rules => rules::run(),
    }
}

/// Reads an input file named on the command line.
fn read_input(ctx: &ServiceContext, path: &Path) -> Result<String> {
    ctx.fs
        .read_to_string(path)
        .map_err(|e| Error::Read { path: path.to_path_buf(), message: e.to_string() })
}

/// Writes an output file, creating parent directories.
fn write_output(ctx: &ServiceContext, path: &Path, contents: &str) -> Result<()> {
    ctx.fs
        .write(path, contents)
        .map_err(|e| Error::Write { path: path.to_path_buf(), message: e.to_string() })
}

/// Pretty-prints a value as JSON.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Serialization { message: e.to_string() })
}
