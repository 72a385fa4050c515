//! Core library entry for the `docdrift` CLI.
//!
//! `docdrift` decides, for every page in a documentation manifest, whether
//! the page still reflects the source files it was written from. Text on
//! both sides is reduced to a [`facts::FactSet`], the sets are diffed and
//! scored by [`drift::compare`], and [`analyze::Analyzer`] runs that over the
//! whole manifest.

pub mod adapters;
pub mod analyze;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod drift;
pub mod error;
pub mod facts;
pub mod manifest;
pub mod ports;
pub mod report;
pub mod resolve;

use clap::Parser;

pub use error::{Error, Result};

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed and treated as success.
///
/// # Errors
///
/// Returns an error when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err.to_string())),
    };
    commands::dispatch(&cli.command)
}
