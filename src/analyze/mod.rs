//! Mapping orchestration: runs extraction and comparison for every
//! manifest entry and aggregates the outcomes.
//!
//! The orchestrator is the only stateful piece of a run. Extraction and
//! comparison are pure; missing pages and missing sources are recorded on
//! the summary and never stop the run.

pub mod summary;

use std::path::{Path, PathBuf};

use crate::config::AnalyzerConfig;
use crate::context::ServiceContext;
use crate::drift::{compare, ScoringPolicy};
use crate::error::{Error, Result};
use crate::facts::Extractor;
use crate::manifest::{Manifest, ManifestEntry};
use crate::resolve::{ResolverLimits, SourceResolver};

pub use summary::{
    staleness_reasons, AnalysisResult, MissingDoc, MissingSource, RunSummary, SummaryCounts,
};
use summary::EntryOutcome;

/// Leading segment stripped from manifest doc paths before joining them to
/// the docs root.
const DOCS_PREFIX: &str = "docs/";

/// Drives drift analysis over a manifest.
pub struct Analyzer<'a> {
    ctx: &'a ServiceContext,
    extractor: Extractor,
    policy: ScoringPolicy,
    limits: ResolverLimits,
}

impl<'a> Analyzer<'a> {
    /// Builds an analyzer from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a configured model pattern is invalid.
    pub fn new(ctx: &'a ServiceContext, config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            ctx,
            extractor: Extractor::new(&config.rules)?,
            policy: config.scoring,
            limits: config.resolver,
        })
    }

    /// Analyzes every entry of `manifest`, reading sources under `repo_root`
    /// (one directory per repo) and pages under `doc_root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepoRootMissing`] or [`Error::DocRootMissing`] before
    /// any entry is processed. Per-entry problems are never errors.
    pub fn analyze(
        &self,
        manifest: &Manifest,
        repo_root: &Path,
        doc_root: &Path,
    ) -> Result<RunSummary> {
        if !self.ctx.fs.exists(repo_root) {
            return Err(Error::RepoRootMissing(repo_root.to_path_buf()));
        }
        if !self.ctx.fs.exists(doc_root) {
            return Err(Error::DocRootMissing(doc_root.to_path_buf()));
        }

        let resolver = SourceResolver::new(self.ctx.fs.as_ref(), repo_root, self.limits);
        let mut summary = RunSummary::default();
        for entry in &manifest.entries {
            summary.record(self.analyze_entry(entry, &resolver, doc_root));
        }
        let summary = summary.finish();

        let counts = summary.summary;
        tracing::info!(
            total = counts.total,
            analyzed = counts.analyzed,
            stale = counts.stale,
            healthy = counts.healthy,
            missing_doc = counts.missing_doc,
            missing_source = counts.missing_source,
            "drift analysis complete"
        );
        Ok(summary)
    }

    fn analyze_entry(
        &self,
        entry: &ManifestEntry,
        resolver: &SourceResolver<'_>,
        doc_root: &Path,
    ) -> EntryOutcome {
        if !entry.is_analyzable() {
            tracing::debug!(
                id = %entry.id,
                relationship = %entry.relationship_type,
                "skipping entry"
            );
            return EntryOutcome::Skipped;
        }

        let doc_file = doc_file_path(doc_root, &entry.doc_path);
        let doc_text = match self.ctx.fs.read_to_string(&doc_file) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    id = %entry.id,
                    path = %doc_file.display(),
                    error = %e,
                    "documentation page missing"
                );
                return EntryOutcome::MissingDoc(MissingDoc {
                    id: entry.id.clone(),
                    doc_path: entry.doc_path.clone(),
                    priority: entry.priority(),
                });
            }
        };

        let bundle = resolver.resolve_all(&entry.sources);
        if bundle.is_empty() {
            tracing::warn!(id = %entry.id, "no declared source could be found");
            return EntryOutcome::MissingSource(MissingSource {
                id: entry.id.clone(),
                doc_path: entry.doc_path.clone(),
                priority: entry.priority(),
                sources_missing: bundle.missing,
            });
        }
        if bundle.is_partial() {
            tracing::debug!(id = %entry.id, missing = ?bundle.missing, "some sources missing");
        }

        let source_facts = self.extractor.extract(&bundle.text);
        let doc_facts = self.extractor.extract(&doc_text);
        let comparison = compare(&source_facts, &doc_facts, &self.policy);
        tracing::debug!(
            id = %entry.id,
            score = comparison.staleness_score,
            stale = comparison.is_stale,
            files = bundle.files.len(),
            "entry analyzed"
        );

        EntryOutcome::Analyzed(AnalysisResult {
            id: entry.id.clone(),
            doc_path: entry.doc_path.clone(),
            relationship: entry.relationship_type,
            priority: entry.priority(),
            sources_found: bundle.found,
            sources_missing: bundle.missing,
            is_stale: comparison.is_stale,
            staleness_reasons: staleness_reasons(&comparison),
            comparison,
        })
    }
}

/// Location of a page under `doc_root`, ignoring a leading `docs/` in the
/// declared path.
fn doc_file_path(doc_root: &Path, doc_path: &str) -> PathBuf {
    doc_root.join(doc_path.strip_prefix(DOCS_PREFIX).unwrap_or(doc_path))
}
