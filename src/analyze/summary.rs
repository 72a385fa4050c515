//! Per-entry results and the run-level summary they accumulate into.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::drift::DriftReport;
use crate::manifest::{Priority, RelationshipType};

/// Config keys previewed in a staleness reason.
const CONFIG_PREVIEW: usize = 5;
/// Feature tags previewed in a staleness reason.
const FEATURE_PREVIEW: usize = 3;

/// Drift analysis of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Manifest entry id.
    pub id: String,
    /// Documentation page path as declared.
    pub doc_path: String,
    /// Declared relationship between page and sources.
    pub relationship: RelationshipType,
    /// Review priority.
    pub priority: Priority,
    /// Number of source references that resolved.
    pub sources_found: usize,
    /// References that resolved to nothing (a partial miss when non-empty).
    pub sources_missing: Vec<String>,
    /// Fact comparison between sources and page.
    pub comparison: DriftReport,
    /// Copy of the comparison verdict.
    pub is_stale: bool,
    /// Short human-readable explanations, one per discrepancy category.
    pub staleness_reasons: Vec<String>,
}

impl AnalysisResult {
    /// Staleness score of the underlying comparison.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.comparison.staleness_score
    }
}

/// An entry whose documentation page does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingDoc {
    /// Manifest entry id.
    pub id: String,
    /// Documentation page path as declared.
    pub doc_path: String,
    /// Review priority.
    pub priority: Priority,
}

/// An entry none of whose source references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSource {
    /// Manifest entry id.
    pub id: String,
    /// Documentation page path as declared.
    pub doc_path: String,
    /// Review priority.
    pub priority: Priority,
    /// Every declared reference, labelled `repo/path`.
    pub sources_missing: Vec<String>,
}

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Entries in the manifest, skipped ones included.
    pub total: usize,
    /// Entries whose facts were compared.
    pub analyzed: usize,
    /// Analyzed entries judged stale.
    pub stale: usize,
    /// Analyzed entries judged up to date.
    pub healthy: usize,
    /// Entries whose page was missing.
    pub missing_doc: usize,
    /// Entries whose sources were all missing.
    pub missing_source: usize,
}

/// Everything a run produced.
///
/// `stale_docs` is ordered high priority first, then by descending score,
/// then by manifest order. The other collections keep manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Aggregate counts.
    pub summary: SummaryCounts,
    /// Stale pages, in review order.
    pub stale_docs: Vec<AnalysisResult>,
    /// Healthy pages.
    pub healthy_docs: Vec<AnalysisResult>,
    /// Pages that do not exist.
    pub missing_docs: Vec<MissingDoc>,
    /// Pages whose sources could not be found.
    pub missing_sources: Vec<MissingSource>,
}

/// What happened to one manifest entry.
#[derive(Debug)]
pub(crate) enum EntryOutcome {
    /// Not part of drift analysis.
    Skipped,
    MissingDoc(MissingDoc),
    MissingSource(MissingSource),
    Analyzed(AnalysisResult),
}

impl RunSummary {
    /// Folds one entry outcome into the summary.
    pub(crate) fn record(&mut self, outcome: EntryOutcome) {
        self.summary.total += 1;
        match outcome {
            EntryOutcome::Skipped => {}
            EntryOutcome::MissingDoc(missing) => {
                self.summary.missing_doc += 1;
                self.missing_docs.push(missing);
            }
            EntryOutcome::MissingSource(missing) => {
                self.summary.missing_source += 1;
                self.missing_sources.push(missing);
            }
            EntryOutcome::Analyzed(result) => {
                self.summary.analyzed += 1;
                if result.is_stale {
                    self.summary.stale += 1;
                    self.stale_docs.push(result);
                } else {
                    self.summary.healthy += 1;
                    self.healthy_docs.push(result);
                }
            }
        }
    }

    /// Orders stale pages for review. Runs once, after every entry is recorded.
    pub(crate) fn finish(mut self) -> Self {
        self.stale_docs.sort_by_key(|r| (r.priority.rank(), Reverse(r.score())));
        self
    }

    /// Percentage of analyzed pages that are healthy, or `None` if nothing was analyzed.
    #[must_use]
    pub fn health_percent(&self) -> Option<f64> {
        if self.summary.analyzed == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.summary.healthy as f64 / self.summary.analyzed as f64 * 100.0;
        Some(pct)
    }
}

/// Builds the reasons list for a comparison, in category order: config,
/// models, outdated models, features.
#[must_use]
pub fn staleness_reasons(report: &DriftReport) -> Vec<String> {
    let mut reasons = Vec::new();
    if !report.missing_config_keys.is_empty() {
        let keys = preview(&report.missing_config_keys, CONFIG_PREVIEW);
        reasons.push(format!("Missing config: {keys}"));
    }
    if !report.missing_models.is_empty() {
        reasons.push(format!("Missing models: {}", report.missing_models.join(", ")));
    }
    if !report.extra_models.is_empty() {
        reasons.push(format!("Outdated models: {}", report.extra_models.join(", ")));
    }
    if !report.missing_features.is_empty() {
        let features = preview(&report.missing_features, FEATURE_PREVIEW);
        reasons.push(format!("Missing features: {features}"));
    }
    reasons
}

fn preview(items: &[String], limit: usize) -> String {
    items.iter().take(limit).map(String::as_str).collect::<Vec<_>>().join(", ")
}
