//! Top-K job ranking by a selectable aggregate.

use serde::{Deserialize, Serialize};

use crate::models::JobRecord;

pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCriterion {
    #[default]
    AverageScore,
    TotalMatches,
}

impl RankCriterion {
    fn key(self, job: &JobRecord) -> f64 {
        match self {
            RankCriterion::AverageScore => job.average_score,
            RankCriterion::TotalMatches => job.total_matches as f64,
        }
    }
}

/// Returns at most `k` jobs, descending by `criterion`.
///
/// The sort is stable, so jobs with equal values keep their store order.
pub fn top_k(jobs: &[JobRecord], criterion: RankCriterion, k: usize) -> Vec<&JobRecord> {
    let mut ranked: Vec<&JobRecord> = jobs.iter().collect();
    ranked.sort_by(|a, b| criterion.key(b).total_cmp(&criterion.key(a)));
    ranked.truncate(k);
    ranked
}
