//! Source-to-documentation mapping manifest.
//!
//! The manifest is produced elsewhere (typically from a spreadsheet of
//! page/source rows) and consumed read-only here. Only the fields drift
//! analysis needs are modelled; everything else in the document is ignored.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// The full manifest: an ordered list of page entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Entries in manifest order; this order breaks ties when sorting results.
    #[serde(rename = "content_sections", default)]
    pub entries: Vec<ManifestEntry>,
}

/// One documentation page and the sources it is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Unique identifier for the entry.
    #[serde(default = "unknown_id")]
    pub id: String,
    /// Path of the documentation page, relative to the docs root.
    #[serde(default)]
    pub doc_path: String,
    /// Declared sources in declaration order.
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// How tightly the page tracks its sources.
    #[serde(default)]
    pub relationship_type: RelationshipType,
    /// Extra bookkeeping; only the priority is used.
    #[serde(default)]
    pub metadata: EntryMetadata,
}

fn unknown_id() -> String {
    "unknown".to_string()
}

impl ManifestEntry {
    /// The entry's review priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.metadata.priority
    }

    /// Whether the entry takes part in drift analysis at all.
    #[must_use]
    pub fn is_analyzable(&self) -> bool {
        self.relationship_type != RelationshipType::NotApplicable && !self.sources.is_empty()
    }
}

/// Per-entry metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Result ordering priority.
    #[serde(default)]
    pub priority: Priority,
}

/// A declared source: a path inside a named repository checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Repository directory name under the repository root.
    #[serde(default)]
    pub repo: String,
    /// Path inside the repository; may contain a `*` wildcard.
    #[serde(default)]
    pub path: String,
}

impl SourceRef {
    /// Whether the path must be expanded as a glob.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.path.contains('*')
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.repo, self.path)
    }
}

/// How a page relates to its sources.
///
/// Labels are matched case-insensitively. A blank or unrecognized label
/// reads as [`RelationshipType::Derived`], so the entry is still analyzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipType {
    /// Page closely mirrors its source.
    #[serde(rename = "DIRECT")]
    Direct,
    /// Page is synthesized from its sources.
    #[default]
    #[serde(rename = "DERIVED")]
    Derived,
    /// Page only references its sources.
    #[serde(rename = "REFERENCE")]
    Reference,
    /// Page is maintained by hand and never analyzed.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Direct => "DIRECT",
            Self::Derived => "DERIVED",
            Self::Reference => "REFERENCE",
            Self::NotApplicable => "N/A",
        };
        f.write_str(label)
    }
}

impl RelationshipType {
    fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "DIRECT" => Self::Direct,
            "REFERENCE" => Self::Reference,
            "N/A" => Self::NotApplicable,
            "" | "DERIVED" => Self::Derived,
            other => {
                tracing::warn!(relationship = other, "unrecognized relationship type");
                Self::Derived
            }
        }
    }
}

impl<'de> Deserialize<'de> for RelationshipType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map_or_else(Self::default, Self::from_label))
    }
}

/// Review priority, used only to order results.
///
/// A blank or unrecognized label ranks as [`Priority::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Reviewed first.
    High,
    /// The default.
    #[default]
    Medium,
    /// Reviewed last.
    Low,
}

impl Priority {
    /// Sort rank: `high` → 0, `medium` → 1, `low` → 2.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map_or_else(Self::default, Self::from_label))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(label)
    }
}

impl Manifest {
    /// Parses a manifest document. YAML is used when `is_yaml`, JSON otherwise.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse failure.
    pub fn parse(text: &str, is_yaml: bool) -> std::result::Result<Self, String> {
        if is_yaml {
            serde_yaml::from_str(text).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(text).map_err(|e| e.to_string())
        }
    }

    /// Loads a manifest through the context's filesystem.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML; anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestRead`] or [`Error::ManifestParse`]; either is
    /// fatal to a run.
    pub fn load(ctx: &ServiceContext, path: &Path) -> Result<Self> {
        let text = ctx
            .fs
            .read_to_string(path)
            .map_err(|e| Error::ManifestRead { path: path.to_path_buf(), message: e.to_string() })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        Self::parse(&text, is_yaml)
            .map_err(|message| Error::ManifestParse { path: path.to_path_buf(), message })
    }
}
