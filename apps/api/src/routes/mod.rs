pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::store::handlers as records;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Records
        .route("/api/v1/jobs", get(records::handle_list_jobs))
        .route("/api/v1/jobs/top", get(matching::handle_top_jobs))
        .route("/api/v1/jobs/:id", get(records::handle_get_job))
        .route("/api/v1/resumes", get(records::handle_list_resumes))
        .route("/api/v1/resumes/:id", get(records::handle_get_resume))
        // Matching
        .route("/api/v1/match", post(matching::handle_run_match))
        .route("/api/v1/match/latest", get(matching::handle_latest_run))
        .with_state(state)
}
