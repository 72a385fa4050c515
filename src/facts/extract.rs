//! Pattern-based fact extraction.
//!
//! Each category is the union of a few narrow patterns. A fact the patterns
//! miss only hides a drift signal; it never invents one.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::rules::{ExtractionRules, ModelFamily};
use super::FactSet;
use crate::error::{Error, Result};

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```\w*\n.*?```").unwrap());
static TABLE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\|\s*`([a-z][a-z0-9_]*)`\s*\|").unwrap());
static DEFINITION_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\*\*|`)([a-z][a-z0-9_]*)(?:\*\*|`)\s*[-:]").unwrap());
static BACKTICK_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([a-z]+-[a-z0-9-]+)`").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{2,3}\s+(.+)$").unwrap());
static HEADING_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static ENV_VARS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\$([A-Z][A-Z0-9_]+)").unwrap(),
        Regex::new(r"\$\{([A-Z][A-Z0-9_]+)\}").unwrap(),
        Regex::new(r"export\s+([A-Z][A-Z0-9_]+)").unwrap(),
    ]
});

/// A model family with its pattern compiled.
#[derive(Debug)]
struct CompiledFamily {
    family: String,
    regex: Regex,
}

/// Turns raw text into a [`FactSet`] using a fixed rule set.
///
/// Construction compiles the configurable patterns; extraction itself is
/// total and never fails.
#[derive(Debug)]
pub struct Extractor {
    noise_words: BTreeSet<String>,
    min_token_len: usize,
    features: Vec<(String, String)>,
    model_families: Vec<CompiledFamily>,
    backtick_families: Vec<String>,
}

impl Extractor {
    /// Builds an extractor from the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a model-family pattern does not compile.
    pub fn new(rules: &ExtractionRules) -> Result<Self> {
        let model_families =
            rules.model_families.iter().map(compile_family).collect::<Result<Vec<_>>>()?;

        let features = rules
            .feature_phrases
            .iter()
            .map(|phrase| {
                let phrase = phrase.to_lowercase();
                let tag = phrase.replace(' ', "_");
                (phrase, tag)
            })
            .collect();

        Ok(Self {
            noise_words: rules.noise_words.iter().map(|w| w.to_lowercase()).collect(),
            min_token_len: rules.min_token_len,
            features,
            model_families,
            backtick_families: rules.backtick_families.iter().map(|f| f.to_lowercase()).collect(),
        })
    }

    /// Extracts every fact category from `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> FactSet {
        FactSet {
            config_keys: self.config_keys(text),
            models: self.models(text),
            sections: self.sections(text),
            features: self.features(text),
            env_vars: env_vars(text),
        }
    }

    /// Configuration keys from table cells and definition-style mentions,
    /// ignoring anything inside fenced code blocks.
    fn config_keys(&self, text: &str) -> BTreeSet<String> {
        let clean = strip_code_blocks(text);
        TABLE_KEY
            .captures_iter(&clean)
            .chain(DEFINITION_KEY.captures_iter(&clean))
            .map(|caps| caps[1].to_lowercase())
            .filter(|key| {
                key.chars().count() > self.min_token_len && !self.noise_words.contains(key)
            })
            .collect()
    }

    fn models(&self, text: &str) -> BTreeSet<String> {
        let mut models = BTreeSet::new();

        for compiled in &self.model_families {
            for caps in compiled.regex.captures_iter(text) {
                let segments: Vec<&str> =
                    caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
                let id = if segments.is_empty() {
                    caps[0].to_string()
                } else {
                    format!("{}-{}", compiled.family, segments.join("-"))
                };
                models.insert(normalize_model(&id));
            }
        }

        for caps in BACKTICK_MODEL.captures_iter(text) {
            let candidate = caps[1].to_lowercase();
            if self.backtick_families.iter().any(|f| candidate.contains(f.as_str())) {
                models.insert(candidate);
            }
        }

        models
    }

    /// Level-2 and level-3 headings, lowercased with punctuation removed.
    fn sections(&self, text: &str) -> BTreeSet<String> {
        HEADING
            .captures_iter(text)
            .map(|caps| {
                let heading = caps[1].trim().to_lowercase();
                HEADING_PUNCT.replace_all(&heading, "").into_owned()
            })
            .filter(|heading| heading.chars().count() > self.min_token_len)
            .collect()
    }

    fn features(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        self.features
            .iter()
            .filter(|(phrase, _)| lower.contains(phrase.as_str()))
            .map(|(_, tag)| tag.clone())
            .collect()
    }
}

fn compile_family(family: &ModelFamily) -> Result<CompiledFamily> {
    let regex = RegexBuilder::new(&family.pattern)
        .case_insensitive(family.case_insensitive)
        .build()
        .map_err(|source| Error::InvalidPattern { pattern: family.pattern.clone(), source })?;
    Ok(CompiledFamily { family: family.family.to_lowercase(), regex })
}

fn normalize_model(id: &str) -> String {
    id.to_lowercase().replace('_', "-")
}

/// Removes fenced code blocks (opening fence, optional info word, newline,
/// body, closing fence).
#[must_use]
pub fn strip_code_blocks(text: &str) -> Cow<'_, str> {
    CODE_BLOCK.replace_all(text, "")
}

/// Environment variable names referenced as `$VAR`, `${VAR}` or `export VAR`.
fn env_vars(text: &str) -> BTreeSet<String> {
    ENV_VARS
        .iter()
        .flat_map(|re| re.captures_iter(text).map(|caps| caps[1].to_string()))
        .collect()
}
