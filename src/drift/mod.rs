//! Drift detection: compares a source fact set against a doc fact set.

pub mod scoring;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::facts::{FactCounts, FactSet};

pub use scoring::{DiffCounts, ScoringPolicy};

/// Outcome of comparing one source bundle with one documentation page.
///
/// All lists are sorted. `missing_sections` is capped for display; the score
/// always reflects the full count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Weighted sum of category discrepancies.
    pub staleness_score: u32,
    /// Whether the page is considered stale.
    pub is_stale: bool,
    /// Config keys in source but not in the doc.
    pub missing_config_keys: Vec<String>,
    /// Config keys in the doc but not in source (reported, not scored).
    pub extra_config_keys: Vec<String>,
    /// Models in source but not in the doc.
    pub missing_models: Vec<String>,
    /// Models the doc names that source no longer does.
    pub extra_models: Vec<String>,
    /// Source sections absent from the doc, truncated for display.
    pub missing_sections: Vec<String>,
    /// Source feature tags absent from the doc.
    pub missing_features: Vec<String>,
    /// Category sizes on the source side.
    pub source_facts: FactCounts,
    /// Category sizes on the doc side.
    pub doc_facts: FactCounts,
}

impl DriftReport {
    /// Returns `true` if no category differs in a way that is scored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.staleness_score == 0 && !self.is_stale
    }
}

/// Compares source facts against doc facts under the given policy.
///
/// Pure and deterministic: identical inputs always produce identical reports,
/// list order included.
#[must_use]
pub fn compare(source: &FactSet, doc: &FactSet, policy: &ScoringPolicy) -> DriftReport {
    let missing_config = difference(&source.config_keys, &doc.config_keys);
    let extra_config = difference(&doc.config_keys, &source.config_keys);
    let missing_models = difference(&source.models, &doc.models);
    let extra_models = difference(&doc.models, &source.models);
    let mut missing_sections = difference(&source.sections, &doc.sections);
    let missing_features = difference(&source.features, &doc.features);

    let counts = DiffCounts {
        missing_config: missing_config.len(),
        missing_models: missing_models.len(),
        extra_models: extra_models.len(),
        missing_sections: missing_sections.len(),
        missing_features: missing_features.len(),
    };
    let staleness_score = policy.score(&counts);
    let is_stale = policy.is_stale(&counts, staleness_score);

    missing_sections.truncate(policy.section_display_limit);

    DriftReport {
        staleness_score,
        is_stale,
        missing_config_keys: missing_config,
        extra_config_keys: extra_config,
        missing_models,
        extra_models,
        missing_sections,
        missing_features,
        source_facts: source.counts(),
        doc_facts: doc.counts(),
    }
}

/// Sorted `left − right`.
fn difference(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Vec<String> {
    left.difference(right).cloned().collect()
}
