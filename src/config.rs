//! Analyzer configuration: extraction rules, scoring policy, resolver limits.
//!
//! Every section defaults independently, so a YAML file only needs to name
//! what it changes:
//!
//! ```yaml
//! scoring:
//!   stale_threshold: 8
//! rules:
//!   feature_phrases: [streaming, caching]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::drift::ScoringPolicy;
use crate::error::{Error, Result};
use crate::facts::ExtractionRules;
use crate::resolve::ResolverLimits;

/// Complete analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Fact extraction vocabularies and patterns.
    pub rules: ExtractionRules,
    /// Weights and thresholds for the staleness verdict.
    pub scoring: ScoringPolicy,
    /// Source resolution limits.
    pub resolver: ResolverLimits,
}

impl AnalyzerConfig {
    /// Loads a YAML config file through the context's filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(ctx: &ServiceContext, path: &Path) -> Result<Self> {
        let text = ctx
            .fs
            .read_to_string(path)
            .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })?;
        serde_yaml::from_str(&text)
            .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a given file cannot be read or parsed.
    pub fn load_or_default(ctx: &ServiceContext, path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), |path| Self::load(ctx, path))
    }

    /// Renders the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if YAML encoding fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization { message: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let fs = MemoryFileSystem::new().with_file(
            "/docdrift.yaml",
            "scoring:\n  stale_threshold: 8\nresolver:\n  max_glob_matches: 20\n",
        );
        let ctx = ServiceContext::in_memory(fs);
        let config = AnalyzerConfig::load(&ctx, Path::new("/docdrift.yaml")).unwrap();
        assert_eq!(config.scoring.stale_threshold, 8);
        assert_eq!(config.scoring.missing_section_weight, 2);
        assert_eq!(config.resolver.max_glob_matches, 20);
        assert_eq!(config.rules, ExtractionRules::default());
    }

    #[test]
    fn defaults_survive_a_yaml_round_trip() {
        let yaml = AnalyzerConfig::default().to_yaml().unwrap();
        let parsed: AnalyzerConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, AnalyzerConfig::default());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let ctx = ServiceContext::in_memory(MemoryFileSystem::new());
        let err = AnalyzerConfig::load_or_default(&ctx, Some(Path::new("/nope.yaml"))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        let ctx = ServiceContext::in_memory(MemoryFileSystem::new());
        assert_eq!(AnalyzerConfig::load_or_default(&ctx, None).unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let fs = MemoryFileSystem::new().with_file("/bad.yaml", "scoring: [not, a, map]\n");
        let ctx = ServiceContext::in_memory(fs);
        assert!(AnalyzerConfig::load(&ctx, Path::new("/bad.yaml")).is_err());
    }
}
