//! Extraction vocabularies and model-family patterns.
//!
//! Everything here is data. The extractor compiles it once at construction,
//! so the rule set can be tuned from a config file without code changes.

use serde::{Deserialize, Serialize};

/// Noise words never accepted as configuration keys.
const NOISE_WORDS: &[&str] = &[
    "true",
    "false",
    "null",
    "none",
    "type",
    "value",
    "default",
    "string",
    "int",
    "bool",
    "float",
    "description",
    "example",
    "title",
    "name",
    "config",
    "module",
    "source",
    "providers",
];

/// Feature phrases detected by presence anywhere in the text.
const FEATURE_PHRASES: &[&str] = &[
    "streaming",
    "tool use",
    "function calling",
    "vision",
    "rate limit",
    "retry",
    "debug",
    "beta",
    "context window",
    "token",
    "error recovery",
    "validation",
    "graceful",
];

/// Substrings that mark a backtick-quoted hyphenated token as a model name.
const BACKTICK_FAMILIES: &[&str] = &["claude", "gpt", "llama", "mistral"];

/// A vendor model family recognized by a regular expression.
///
/// Every capture group of `pattern` contributes one hyphen-joined segment
/// after `family`, so `claude[-_]?([a-z]+)[-_]?(\d+[-_]?\d*)` applied to
/// `Claude_Opus_4` yields `claude-opus-4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFamily {
    /// Normalized family prefix, e.g. `claude`.
    pub family: String,
    /// Regular expression with one capture group per identifier segment.
    pub pattern: String,
    /// Whether the pattern matches regardless of case.
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

const fn default_true() -> bool {
    true
}

impl ModelFamily {
    fn new(family: &str, pattern: &str) -> Self {
        Self { family: family.to_string(), pattern: pattern.to_string(), case_insensitive: true }
    }
}

/// The full extraction rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Candidate configuration keys rejected as generic words.
    pub noise_words: Vec<String>,
    /// Minimum length (exclusive) for configuration keys and section headings.
    pub min_token_len: usize,
    /// Controlled vocabulary of feature phrases.
    pub feature_phrases: Vec<String>,
    /// Vendor model families with their normalization patterns.
    pub model_families: Vec<ModelFamily>,
    /// Family substrings accepted for backtick-quoted model tokens.
    pub backtick_families: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            noise_words: to_strings(NOISE_WORDS),
            min_token_len: 2,
            feature_phrases: to_strings(FEATURE_PHRASES),
            model_families: vec![
                ModelFamily::new("claude", r"claude[-_]?([a-z]+)[-_]?(\d+[-_]?\d*)"),
                ModelFamily::new("gpt", r"gpt[-_]?(\d+(?:[-_]?turbo)?(?:[-_]?preview)?)"),
            ],
            backtick_families: to_strings(BACKTICK_FAMILIES),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
