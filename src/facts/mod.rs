//! Structured facts extracted from source and documentation text.
//!
//! A [`FactSet`] is what a document *says* in comparable form: config keys,
//! model identifiers, section headings, feature tags and environment
//! variables. Source bundles and doc pages are extracted with the same
//! [`Extractor`] so their sets can be diffed directly.

pub mod extract;
pub mod rules;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use extract::{strip_code_blocks, Extractor};
pub use rules::{ExtractionRules, ModelFamily};

/// Normalized facts found in one body of text.
///
/// Every field is an ordered set, so iteration and serialization are
/// lexicographic and deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    /// Lowercase configuration parameter names.
    pub config_keys: BTreeSet<String>,
    /// Lowercase, hyphen-normalized model identifiers.
    pub models: BTreeSet<String>,
    /// Lowercase H2/H3 heading text with punctuation removed.
    pub sections: BTreeSet<String>,
    /// Feature tags from the controlled vocabulary.
    pub features: BTreeSet<String>,
    /// Uppercase environment variable names.
    pub env_vars: BTreeSet<String>,
}

impl FactSet {
    /// Per-category sizes of the scored categories.
    #[must_use]
    pub fn counts(&self) -> FactCounts {
        FactCounts {
            config_keys: self.config_keys.len(),
            models: self.models.len(),
            sections: self.sections.len(),
            features: self.features.len(),
        }
    }
}

/// Sizes of the scored fact categories, kept on drift reports for context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCounts {
    /// Number of configuration keys.
    pub config_keys: usize,
    /// Number of model identifiers.
    pub models: usize,
    /// Number of section headings.
    pub sections: usize,
    /// Number of feature tags.
    pub features: usize,
}
