//! Scoring strategies — pluggable, trait-based scorers over precomputed skill vectors.
//!
//! `KeywordStrategy`: unweighted overlap count, range [0, vocabulary size].
//! `WeightedStrategy`: tier-weighted overlap normalized against the job's requirements,
//! range [0, 10].
//!
//! Both share preprocessing, matching and aggregation; only `score` differs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::{SkillCatalog, TieredVocabulary, Vocabulary};
use crate::models::SkillVector;

/// Default minimum job weight below which the weighted score is forced to 0.
pub const DEFAULT_MIN_SIGNAL_WEIGHT: f64 = 5.0;

/// Upper bound of the weighted score.
pub const WEIGHTED_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Keyword,
    Weighted,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Keyword => write!(f, "keyword"),
            StrategyKind::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(StrategyKind::Keyword),
            "weighted" => Ok(StrategyKind::Weighted),
            other => Err(format!("unknown strategy '{other}' (expected keyword|weighted)")),
        }
    }
}

/// The scoring trait. The vocabulary it exposes is the one records must be
/// preprocessed against before `score` is called.
pub trait MatchStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn vocabulary(&self) -> &Vocabulary;

    /// Similarity of one résumé vector to one job vector.
    ///
    /// Panics if either vector was not computed against this strategy's vocabulary.
    fn score(&self, resume: &SkillVector, job: &SkillVector) -> f64;
}

fn assert_vector_shape(vocabulary: &Vocabulary, resume: &SkillVector, job: &SkillVector) {
    assert_eq!(
        resume.len(),
        vocabulary.len(),
        "résumé skill vector does not match vocabulary size; was preprocess skipped?"
    );
    assert_eq!(
        job.len(),
        vocabulary.len(),
        "job skill vector does not match vocabulary size; was preprocess skipped?"
    );
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordStrategy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct KeywordStrategy {
    vocabulary: Vocabulary,
}

impl KeywordStrategy {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }
}

impl MatchStrategy for KeywordStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Keyword
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn score(&self, resume: &SkillVector, job: &SkillVector) -> f64 {
        assert_vector_shape(&self.vocabulary, resume, job);
        resume.iter().zip(job.iter()).filter(|&(r, j)| r && j).count() as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedStrategy
// ────────────────────────────────────────────────────────────────────────────

/// Tier-weighted scorer. The denominator is the weight the job itself asks for,
/// so skills only the résumé lists never dilute the score.
#[derive(Debug, Clone)]
pub struct WeightedStrategy {
    vocabulary: Vocabulary,
    weights: Vec<f64>,
    min_signal_weight: f64,
}

impl WeightedStrategy {
    pub fn new(tiers: TieredVocabulary, min_signal_weight: f64) -> Self {
        Self {
            weights: tiers.weights(),
            vocabulary: tiers.vocabulary().clone(),
            min_signal_weight,
        }
    }
}

impl MatchStrategy for WeightedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Weighted
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn score(&self, resume: &SkillVector, job: &SkillVector) -> f64 {
        assert_vector_shape(&self.vocabulary, resume, job);

        let mut job_possible = 0.0_f64;
        let mut matched = 0.0_f64;
        for ((weight, r), j) in self.weights.iter().zip(resume.iter()).zip(job.iter()) {
            if j {
                job_possible += weight;
                if r {
                    matched += weight;
                }
            }
        }

        // Near-empty postings carry no meaningful requirements.
        if job_possible < self.min_signal_weight || job_possible == 0.0 {
            return 0.0;
        }
        (matched / job_possible) * WEIGHTED_SCALE
    }
}

/// Builds the strategy for `kind` from the active catalog.
pub fn build_strategy(
    kind: StrategyKind,
    catalog: &SkillCatalog,
    min_signal_weight: f64,
) -> Box<dyn MatchStrategy> {
    match kind {
        StrategyKind::Keyword => Box::new(KeywordStrategy::new(catalog.keyword.clone())),
        StrategyKind::Weighted => Box::new(WeightedStrategy::new(
            catalog.weighted.clone(),
            min_signal_weight,
        )),
    }
}
