//! Axum route handlers for browsing the Record Store.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::{JobRecord, ResumeRecord};
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    let store = state.store.read().await;
    Json(store.jobs.clone())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    let store = state.store.read().await;
    store
        .find_job(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<ResumeRecord>> {
    let store = state.store.read().await;
    Json(store.resumes.clone())
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    let store = state.store.read().await;
    store
        .find_resume(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
