//! Markdown rendering of a run summary.

use chrono::{DateTime, Utc};

use crate::analyze::{AnalysisResult, RunSummary};
use crate::manifest::Priority;

/// Config keys listed per stale page.
const CONFIG_KEYS_SHOWN: usize = 10;
/// Healthy pages listed before collapsing the rest into a count.
const HEALTHY_SHOWN: usize = 10;
/// Pages listed per recommendation tier.
const RECOMMENDATIONS_SHOWN: usize = 5;
/// Reasons listed per high-priority recommendation.
const REASONS_SHOWN: usize = 2;

/// Overall documentation health derived from the healthy share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// At least 90% of analyzed pages are healthy.
    Healthy,
    /// At least 70% of analyzed pages are healthy.
    Warning,
    /// Fewer than 70% are healthy, or nothing was analyzed.
    Critical,
}

impl HealthStatus {
    /// Classifies a healthy percentage.
    #[must_use]
    pub fn from_percent(pct: f64) -> Self {
        if pct >= 90.0 {
            Self::Healthy
        } else if pct >= 70.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Renders a human-readable freshness report.
#[must_use]
pub fn render_markdown(run: &RunSummary, generated_at: DateTime<Utc>) -> String {
    let s = &run.summary;
    let pct = run.health_percent().unwrap_or(0.0);
    let status = HealthStatus::from_percent(pct);

    let mut lines = vec![
        "# Documentation Freshness Report".to_string(),
        String::new(),
        format!("**Generated:** {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        "**Analysis:** structured fact comparison (config keys, models, sections, features)"
            .to_string(),
        String::new(),
        "## Summary".to_string(),
        String::new(),
        "| Metric | Value |".to_string(),
        "|--------|-------|".to_string(),
        format!("| Total entries | {} |", s.total),
        format!("| Analyzed | {} |", s.analyzed),
        format!("| Healthy | {} |", s.healthy),
        format!("| Stale | {} |", s.stale),
        format!("| Missing docs | {} |", s.missing_doc),
        format!("| Missing sources | {} |", s.missing_source),
        format!("| Health score | {pct:.0}% |"),
        format!("| Status | {} |", status.label()),
        String::new(),
        format!("## Stale Documentation ({})", s.stale),
        String::new(),
    ];

    if run.stale_docs.is_empty() {
        lines.push("*No stale documentation found.*".to_string());
        lines.push(String::new());
    }
    for doc in &run.stale_docs {
        push_stale_block(&mut lines, doc);
    }

    lines.push(format!("## Healthy Documentation ({})", s.healthy));
    lines.push(String::new());
    if run.healthy_docs.is_empty() {
        lines.push("*No healthy documentation found.*".to_string());
    }
    for doc in run.healthy_docs.iter().take(HEALTHY_SHOWN) {
        lines.push(format!("- {}", doc.doc_path));
    }
    if run.healthy_docs.len() > HEALTHY_SHOWN {
        lines.push(format!("- ... and {} more", run.healthy_docs.len() - HEALTHY_SHOWN));
    }
    lines.push(String::new());

    push_recommendations(&mut lines, run);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_stale_block(lines: &mut Vec<String>, doc: &AnalysisResult) {
    let comp = &doc.comparison;
    let reasons = if doc.staleness_reasons.is_empty() {
        "Score threshold".to_string()
    } else {
        doc.staleness_reasons.join("; ")
    };

    lines.push(format!("### {}", doc.doc_path));
    lines.push(String::new());
    lines.push("| Attribute | Value |".to_string());
    lines.push("|-----------|-------|".to_string());
    lines.push(format!("| Priority | {} |", doc.priority.to_string().to_uppercase()));
    lines.push(format!("| Staleness score | {} |", comp.staleness_score));
    lines.push(format!("| Reasons | {reasons} |"));
    lines.push(String::new());

    if !comp.missing_config_keys.is_empty() {
        lines.push("**Missing config keys:**".to_string());
        for key in comp.missing_config_keys.iter().take(CONFIG_KEYS_SHOWN) {
            lines.push(format!("- `{key}`"));
        }
        lines.push(String::new());
    }

    if !comp.missing_models.is_empty() || !comp.extra_models.is_empty() {
        lines.push("**Model mismatches:**".to_string());
        for model in &comp.missing_models {
            lines.push(format!("- Missing: `{model}`"));
        }
        for model in &comp.extra_models {
            lines.push(format!("- Outdated: `{model}` (in doc but not source)"));
        }
        lines.push(String::new());
    }

    if !comp.missing_features.is_empty() {
        lines.push("**Missing features:**".to_string());
        for feature in &comp.missing_features {
            lines.push(format!("- {}", feature.replace('_', " ")));
        }
        lines.push(String::new());
    }

    if !doc.sources_missing.is_empty() {
        lines.push(format!("*Sources not found:* {}", doc.sources_missing.join(", ")));
        lines.push(String::new());
    }
}

fn push_recommendations(lines: &mut Vec<String>, run: &RunSummary) {
    lines.push("## Recommendations".to_string());
    lines.push(String::new());

    if run.stale_docs.is_empty() {
        lines.push("All documentation is up to date.".to_string());
        return;
    }

    let high: Vec<&AnalysisResult> =
        run.stale_docs.iter().filter(|d| d.priority == Priority::High).collect();
    if !high.is_empty() {
        lines.push("### High priority (update immediately)".to_string());
        lines.push(String::new());
        for doc in high.iter().take(RECOMMENDATIONS_SHOWN) {
            lines.push(format!("1. **{}**", doc.doc_path));
            for reason in doc.staleness_reasons.iter().take(REASONS_SHOWN) {
                lines.push(format!("   - {reason}"));
            }
        }
        lines.push(String::new());
    }

    let medium: Vec<&AnalysisResult> =
        run.stale_docs.iter().filter(|d| d.priority == Priority::Medium).collect();
    if !medium.is_empty() {
        lines.push("### Medium priority".to_string());
        lines.push(String::new());
        for doc in medium.iter().take(RECOMMENDATIONS_SHOWN) {
            lines.push(format!("1. **{}** - score {}", doc.doc_path, doc.score()));
        }
        lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::SummaryCounts;
    use crate::drift::DriftReport;
    use crate::facts::FactCounts;
    use crate::manifest::RelationshipType;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    fn result(path: &str, priority: Priority, stale: bool) -> AnalysisResult {
        AnalysisResult {
            id: path.to_string(),
            doc_path: path.to_string(),
            relationship: RelationshipType::Direct,
            priority,
            sources_found: 1,
            sources_missing: vec![],
            comparison: DriftReport {
                staleness_score: if stale { 6 } else { 0 },
                is_stale: stale,
                missing_config_keys: if stale { vec!["max_tokens".to_string()] } else { vec![] },
                extra_config_keys: vec![],
                missing_models: vec![],
                extra_models: if stale { vec!["gpt-3".to_string()] } else { vec![] },
                missing_sections: vec![],
                missing_features: if stale { vec!["tool_use".to_string()] } else { vec![] },
                source_facts: FactCounts::default(),
                doc_facts: FactCounts::default(),
            },
            is_stale: stale,
            staleness_reasons: if stale {
                vec!["Missing config: max_tokens".to_string(), "Outdated models: gpt-3".to_string()]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(HealthStatus::from_percent(95.0), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_percent(90.0), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_percent(75.0), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_percent(10.0), HealthStatus::Critical);
    }

    #[test]
    fn empty_run_is_all_clear_but_critical() {
        let text = render_markdown(&RunSummary::default(), at());
        assert!(text.contains("**Generated:** 2025-06-15 10:30 UTC"));
        assert!(text.contains("| Status | CRITICAL |"));
        assert!(text.contains("*No stale documentation found.*"));
        assert!(text.contains("All documentation is up to date."));
    }

    #[test]
    fn stale_pages_are_detailed() {
        let run = RunSummary {
            summary: SummaryCounts {
                total: 2,
                analyzed: 2,
                stale: 1,
                healthy: 1,
                ..SummaryCounts::default()
            },
            stale_docs: vec![result("docs/providers/openai.md", Priority::High, true)],
            healthy_docs: vec![result("docs/index.md", Priority::Low, false)],
            ..RunSummary::default()
        };
        let text = render_markdown(&run, at());
        assert!(text.contains("| Health score | 50% |"));
        assert!(text.contains("### docs/providers/openai.md"));
        assert!(text.contains("| Priority | HIGH |"));
        assert!(text.contains("- `max_tokens`"));
        assert!(text.contains("- Outdated: `gpt-3` (in doc but not source)"));
        assert!(text.contains("- tool use"));
        assert!(text.contains("- docs/index.md"));
        assert!(text.contains("### High priority (update immediately)"));
        assert!(text.contains("   - Outdated models: gpt-3"));
    }

    #[test]
    fn healthy_list_is_capped() {
        let healthy: Vec<AnalysisResult> =
            (0..12).map(|i| result(&format!("docs/page{i}.md"), Priority::Low, false)).collect();
        let run = RunSummary {
            summary: SummaryCounts {
                total: 12,
                analyzed: 12,
                healthy: 12,
                ..SummaryCounts::default()
            },
            healthy_docs: healthy,
            ..RunSummary::default()
        };
        let text = render_markdown(&run, at());
        assert!(text.contains("- docs/page9.md"));
        assert!(!text.contains("- docs/page10.md"));
        assert!(text.contains("- ... and 2 more"));
        assert!(text.contains("| Status | HEALTHY |"));
    }

    #[test]
    fn medium_recommendations_show_score() {
        let run = RunSummary {
            summary: SummaryCounts { total: 1, analyzed: 1, stale: 1, ..SummaryCounts::default() },
            stale_docs: vec![result("docs/api.md", Priority::Medium, true)],
            ..RunSummary::default()
        };
        let text = render_markdown(&run, at());
        assert!(text.contains("1. **docs/api.md** - score 6"));
        assert!(!text.contains("### High priority"));
    }
}
