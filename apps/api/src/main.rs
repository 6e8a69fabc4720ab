mod config;
mod errors;
mod ingest;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::{load_jobs, load_resumes};
use crate::matching::vocabulary::SkillCatalog;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill-Match API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog: built-in unless a JSON override is configured
    let catalog = match &config.skill_catalog_path {
        Some(path) => SkillCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load skill catalog from {}", path.display()))?,
        None => SkillCatalog::builtin(),
    };
    info!(
        "Skill catalog ready: {} keyword phrases, {} weighted phrases",
        catalog.keyword.len(),
        catalog.weighted.vocabulary().len()
    );
    if catalog.keyword.is_empty() || catalog.weighted.vocabulary().is_empty() {
        warn!("Skill catalog has an empty vocabulary; that strategy will score every pair 0");
    }

    // Load records
    let jobs = load_jobs(&config.jobs_path)?;
    let resumes = load_resumes(&config.resumes_path)?;
    info!("Total jobs: {}, total resumes: {}", jobs.len(), resumes.len());

    let state = AppState::new(RecordStore::new(jobs, resumes), catalog, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
