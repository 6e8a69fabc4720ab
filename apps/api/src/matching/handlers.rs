//! Axum route handlers for the Matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::matcher::MatchOptions;
use crate::matching::pipeline::{run_matching, MatchRunSummary};
use crate::matching::ranking::{top_k, RankCriterion, DEFAULT_TOP_K};
use crate::matching::strategy::{build_strategy, StrategyKind};
use crate::models::JobRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Any field left out falls back to the configured default.
#[derive(Debug, Default, Deserialize)]
pub struct MatchRequest {
    pub strategy: Option<StrategyKind>,
    pub strict_mode: Option<bool>,
    pub strict_threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TopJobsQuery {
    pub criterion: Option<RankCriterion>,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TopJobsResponse {
    pub criterion: RankCriterion,
    pub k: usize,
    pub jobs: Vec<JobRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Runs preprocess → match → aggregate over the whole store with the chosen strategy.
pub async fn handle_run_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchRunSummary>, AppError> {
    let defaults = &state.config.matching;
    let kind = request.strategy.unwrap_or(defaults.strategy);
    let options = MatchOptions {
        strict_mode: request.strict_mode.unwrap_or(defaults.strict_mode),
        strict_threshold: request.strict_threshold.unwrap_or(defaults.strict_threshold),
    };

    if !options.strict_threshold.is_finite() || options.strict_threshold < 0.0 {
        return Err(AppError::Validation(
            "strict_threshold must be a non-negative number".to_string(),
        ));
    }

    let strategy = build_strategy(kind, &state.catalog, defaults.min_signal_weight);
    let store = state.store.clone();

    // CPU-bound pass; holds the write lock until the run finishes.
    let summary = tokio::task::spawn_blocking(move || {
        let mut guard = store.blocking_write();
        run_matching(&mut guard, strategy.as_ref(), &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in matching run: {e}")))?;

    Ok(Json(summary))
}

/// GET /api/v1/match/latest
pub async fn handle_latest_run(
    State(state): State<AppState>,
) -> Result<Json<MatchRunSummary>, AppError> {
    let store = state.store.read().await;
    store
        .last_run
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No matching run has completed yet".to_string()))
}

/// GET /api/v1/jobs/top?criterion=average_score&k=10
pub async fn handle_top_jobs(
    State(state): State<AppState>,
    Query(params): Query<TopJobsQuery>,
) -> Json<TopJobsResponse> {
    let criterion = params.criterion.unwrap_or_default();
    let k = params.k.unwrap_or(DEFAULT_TOP_K);

    let store = state.store.read().await;
    let jobs = top_k(&store.jobs, criterion, k).into_iter().cloned().collect();

    Json(TopJobsResponse { criterion, k, jobs })
}
