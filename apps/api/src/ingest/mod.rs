// Record ingestion
// Loads jobs and résumés from line-oriented files at startup.

pub mod loader;

pub use loader::{load_jobs, load_resumes};
