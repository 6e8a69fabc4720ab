//! Matching pipeline: preprocess → match → aggregate, as one run over the store.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::matching::matcher::{match_all, MatchOptions};
use crate::matching::preprocess::preprocess;
use crate::matching::stats::recompute_job_stats;
use crate::matching::strategy::{MatchStrategy, StrategyKind};
use crate::store::RecordStore;

/// Outcome of one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRunSummary {
    pub run_id: Uuid,
    pub strategy: StrategyKind,
    pub options: MatchOptions,
    pub vocabulary_size: usize,
    pub jobs: usize,
    pub resumes: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub elapsed_ms: f64,
    pub completed_at: DateTime<Utc>,
}

/// Runs a full matching pass and records its summary on the store.
///
/// Preprocessing happens here, once per run, for both collections, against the
/// strategy's own vocabulary.
pub fn run_matching(
    store: &mut RecordStore,
    strategy: &dyn MatchStrategy,
    options: &MatchOptions,
) -> MatchRunSummary {
    let started = Instant::now();

    preprocess(&mut store.jobs, strategy.vocabulary());
    preprocess(&mut store.resumes, strategy.vocabulary());
    match_all(&mut store.resumes, &store.jobs, strategy, options);
    recompute_job_stats(&mut store.jobs, &store.resumes);

    let matched = store.resumes.iter().filter(|r| r.is_matched()).count();
    let summary = MatchRunSummary {
        run_id: Uuid::new_v4(),
        strategy: strategy.kind(),
        options: *options,
        vocabulary_size: strategy.vocabulary().len(),
        jobs: store.jobs.len(),
        resumes: store.resumes.len(),
        matched,
        unmatched: store.resumes.len() - matched,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        completed_at: Utc::now(),
    };

    info!(
        "{} matching completed in {:.3} ms: {}/{} resumes matched across {} jobs",
        summary.strategy, summary.elapsed_ms, summary.matched, summary.resumes, summary.jobs
    );

    store.last_run = Some(summary.clone());
    summary
}
