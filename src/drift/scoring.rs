//! Staleness scoring policy.

use serde::{Deserialize, Serialize};

/// Weights and thresholds that turn category diffs into a verdict.
///
/// Config-key and model mismatches always mark a page stale; the numeric
/// threshold catches pages that accumulate many smaller gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Points per config key present in source but absent from the doc.
    pub missing_config_weight: u32,
    /// Points per model present in source but absent from the doc.
    pub missing_model_weight: u32,
    /// Points per model the doc still names but the source no longer does.
    pub outdated_model_weight: u32,
    /// Points per source section heading absent from the doc.
    pub missing_section_weight: u32,
    /// Points per source feature tag absent from the doc.
    pub missing_feature_weight: u32,
    /// Score at or above which a page is stale.
    pub stale_threshold: u32,
    /// Maximum number of missing sections listed on a report.
    pub section_display_limit: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            missing_config_weight: 3,
            missing_model_weight: 3,
            outdated_model_weight: 3,
            missing_section_weight: 2,
            missing_feature_weight: 1,
            stale_threshold: 5,
            section_display_limit: 10,
        }
    }
}

/// Sizes of the scored diff categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffCounts {
    /// Missing config keys.
    pub missing_config: usize,
    /// Missing models.
    pub missing_models: usize,
    /// Outdated (doc-only) models.
    pub extra_models: usize,
    /// Missing section headings, before display truncation.
    pub missing_sections: usize,
    /// Missing feature tags.
    pub missing_features: usize,
}

impl ScoringPolicy {
    /// Weighted sum of the diff counts. Unbounded above; saturates instead of overflowing.
    #[must_use]
    pub fn score(&self, counts: &DiffCounts) -> u32 {
        [
            (self.missing_config_weight, counts.missing_config),
            (self.missing_model_weight, counts.missing_models),
            (self.outdated_model_weight, counts.extra_models),
            (self.missing_section_weight, counts.missing_sections),
            (self.missing_feature_weight, counts.missing_features),
        ]
        .into_iter()
        .fold(0u32, |acc, (weight, count)| {
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            acc.saturating_add(weight.saturating_mul(count))
        })
    }

    /// Whether the given diff counts and score make a page stale.
    #[must_use]
    pub fn is_stale(&self, counts: &DiffCounts, score: u32) -> bool {
        counts.missing_config >= 1
            || counts.missing_models >= 1
            || counts.extra_models >= 1
            || score >= self.stale_threshold
    }
}
