//! `docdrift analyze` command.

use crate::analyze::{Analyzer, RunSummary};
use crate::cli::AnalyzeArgs;
use crate::config::AnalyzerConfig;
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::report;

/// Stale pages listed in the console summary.
const TOP_STALE: usize = 5;

/// Execute the `analyze` command.
///
/// Loads the config and manifest, analyzes every entry, writes the optional
/// JSON and markdown outputs, then prints a short summary.
///
/// # Errors
///
/// Returns an error on any fatal failure (unreadable manifest or config,
/// missing roots, unwritable outputs), or [`Error::StaleFound`] when
/// `--fail-on-stale` is set and a stale page was found.
pub fn run(ctx: &ServiceContext, args: &AnalyzeArgs) -> Result<()> {
    let summary = analyze(ctx, args)?;
    println!("{}", format_summary(&summary));

    if args.fail_on_stale && summary.summary.stale > 0 {
        return Err(Error::StaleFound { count: summary.summary.stale });
    }
    Ok(())
}

/// Runs the analysis and writes the requested output files.
///
/// # Errors
///
/// Returns an error on any fatal failure.
pub fn analyze(ctx: &ServiceContext, args: &AnalyzeArgs) -> Result<RunSummary> {
    let config = AnalyzerConfig::load_or_default(ctx, args.config.as_deref())?;
    let manifest = Manifest::load(ctx, &args.manifest)?;
    tracing::debug!(
        manifest = %args.manifest.display(),
        entries = manifest.entries.len(),
        "manifest loaded"
    );

    let analyzer = Analyzer::new(ctx, &config)?;
    let summary = analyzer.analyze(&manifest, &args.repos_dir, &args.docs_dir)?;

    if let Some(path) = &args.json_output {
        super::write_output(ctx, path, &super::to_json(&summary)?)?;
    }
    if let Some(path) = &args.report {
        super::write_output(ctx, path, &report::render_markdown(&summary, ctx.clock.now()))?;
    }
    Ok(summary)
}

/// Formats the console summary: counts followed by the top stale pages.
#[must_use]
pub fn format_summary(summary: &RunSummary) -> String {
    let s = &summary.summary;
    let mut lines = vec![
        "=== SUMMARY ===".to_string(),
        format!("  Analyzed: {} of {} entries", s.analyzed, s.total),
        format!("  Healthy: {}", s.healthy),
        format!("  Stale: {}", s.stale),
        format!("  Missing docs: {}", s.missing_doc),
        format!("  Missing sources: {}", s.missing_source),
    ];

    if !summary.stale_docs.is_empty() {
        lines.push(String::new());
        lines.push("=== TOP STALE DOCS ===".to_string());
        for doc in summary.stale_docs.iter().take(TOP_STALE) {
            let reasons = if doc.staleness_reasons.is_empty() {
                "Score threshold".to_string()
            } else {
                doc.staleness_reasons.iter().take(2).cloned().collect::<Vec<_>>().join(", ")
            };
            lines.push(format!("  - {} [{}]: {reasons}", doc.doc_path, doc.priority));
        }
    }

    lines.join("\n")
}
