//! Skill vocabularies — the ordered phrase catalogs that define skill-vector positions.
//!
//! Vocabulary order is the index mapping used by preprocessing. Every record scored in
//! one run must be preprocessed against the same vocabulary value.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Built-in catalogs
// ────────────────────────────────────────────────────────────────────────────

const KEYWORD_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "sql",
    "excel",
    "power bi",
    "tableau",
    "pandas",
    "machine learning",
    "deep learning",
    "nlp",
    "statistics",
    "data cleaning",
    "reporting",
    "tensorflow",
    "keras",
    "mlops",
    "computer vision",
    "spring boot",
    "rest apis",
    "docker",
    "git",
    "system design",
    "agile",
    "data analyst",
    "data scientist",
    "software engineer",
    "ml engineer",
    "developer",
    "engineer",
    "experience",
    "professional",
];

const CRITICAL_SKILLS: &[&str] = &[
    "machine learning",
    "deep learning",
    "computer vision",
    "mlops",
    "tensorflow",
    "keras",
];

const CORE_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "nlp",
    "spring boot",
    "docker",
    "system design",
    "rest apis",
    "javascript",
    "c++",
];

const SOFT_SKILLS: &[&str] = &["pandas", "excel", "power bi", "tableau", "git", "agile", "statistics"];

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Skill phrase must not be empty")]
    EmptyPhrase,

    #[error("Skill phrase '{0}' appears more than once")]
    DuplicatePhrase(String),

    #[error("Failed to read skill catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse skill catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Weight tier for the weighted strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Critical,
    Core,
    Soft,
}

impl SkillTier {
    pub fn weight(self) -> f64 {
        match self {
            SkillTier::Critical => 3.0,
            SkillTier::Core => 2.0,
            SkillTier::Soft => 1.0,
        }
    }
}

/// A flat, ordered list of lowercase skill phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    phrases: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary, lowercasing phrases and rejecting empties and repeats.
    pub fn new<I, S>(phrases: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_ascii_lowercase();
            if phrase.is_empty() {
                return Err(CatalogError::EmptyPhrase);
            }
            if !seen.insert(phrase.clone()) {
                return Err(CatalogError::DuplicatePhrase(phrase));
            }
            out.push(phrase);
        }
        Ok(Self { phrases: out })
    }

    /// Unvalidated; only for the built-in lists.
    fn from_static(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Three disjoint tier lists, flattened as critical ++ core ++ soft.
#[derive(Debug, Clone)]
pub struct TieredVocabulary {
    vocabulary: Vocabulary,
    tiers: Vec<SkillTier>,
}

impl TieredVocabulary {
    pub fn new<S: AsRef<str>>(
        critical: &[S],
        core: &[S],
        soft: &[S],
    ) -> Result<Self, CatalogError> {
        let tiers = tier_labels(critical.len(), core.len(), soft.len());
        let vocabulary = Vocabulary::new(
            critical
                .iter()
                .chain(core.iter())
                .chain(soft.iter())
                .map(|s| s.as_ref()),
        )?;
        Ok(Self { vocabulary, tiers })
    }

    fn from_static(critical: &[&str], core: &[&str], soft: &[&str]) -> Self {
        let tiers = tier_labels(critical.len(), core.len(), soft.len());
        let all: Vec<&str> = critical.iter().chain(core).chain(soft).copied().collect();
        Self {
            vocabulary: Vocabulary::from_static(&all),
            tiers,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Tier for each vocabulary position.
    pub fn tiers(&self) -> &[SkillTier] {
        &self.tiers
    }

    /// Weight for each vocabulary position.
    pub fn weights(&self) -> Vec<f64> {
        self.tiers().iter().map(|t| t.weight()).collect()
    }
}

fn tier_labels(critical: usize, core: usize, soft: usize) -> Vec<SkillTier> {
    std::iter::repeat(SkillTier::Critical)
        .take(critical)
        .chain(std::iter::repeat(SkillTier::Core).take(core))
        .chain(std::iter::repeat(SkillTier::Soft).take(soft))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog (both vocabularies together)
// ────────────────────────────────────────────────────────────────────────────

/// On-disk catalog format for `SKILL_CATALOG_PATH`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    keyword: Vec<String>,
    critical: Vec<String>,
    core: Vec<String>,
    soft: Vec<String>,
}

/// The vocabularies used by the two strategies.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub keyword: Vocabulary,
    pub weighted: TieredVocabulary,
}

impl SkillCatalog {
    pub fn builtin() -> Self {
        Self {
            keyword: Vocabulary::from_static(KEYWORD_SKILLS),
            weighted: TieredVocabulary::from_static(CRITICAL_SKILLS, CORE_SKILLS, SOFT_SKILLS),
        }
    }

    pub fn from_json_str(json: &str, path: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            path: path.to_string(),
            source,
        })?;
        Ok(Self {
            keyword: Vocabulary::new(&file.keyword)?,
            weighted: TieredVocabulary::new(
                file.critical.as_slice(),
                file.core.as_slice(),
                file.soft.as_slice(),
            )?,
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&json, &display)
    }
}
