//! Line-oriented loader for job and résumé files.
//!
//! Format: first line is a header and is skipped; every following non-blank line is one
//! record whose whole trimmed text is the description. IDs are assigned in file order.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::{JobRecord, ResumeRecord};

pub const JOB_ID_PREFIX: char = 'J';
pub const RESUME_ID_PREFIX: char = 'R';

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No records found in {path}")]
    Empty { path: String },
}

/// `prefix` followed by `n` zero-padded to at least three digits: J001, J042, J1234.
pub fn generate_id(prefix: char, n: usize) -> String {
    format!("{prefix}{n:03}")
}

/// Descriptions from file contents: header skipped, rows trimmed, blank rows dropped.
pub fn parse_descriptions(contents: &str) -> Vec<String> {
    contents
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn read_descriptions(path: &Path) -> Result<Vec<String>, LoadError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    let descriptions = parse_descriptions(&contents);
    if descriptions.is_empty() {
        return Err(LoadError::Empty { path: display });
    }
    Ok(descriptions)
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>, LoadError> {
    let jobs: Vec<JobRecord> = read_descriptions(path)?
        .into_iter()
        .enumerate()
        .map(|(i, description)| JobRecord::new(generate_id(JOB_ID_PREFIX, i + 1), description))
        .collect();
    info!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

pub fn load_resumes(path: &Path) -> Result<Vec<ResumeRecord>, LoadError> {
    let resumes: Vec<ResumeRecord> = read_descriptions(path)?
        .into_iter()
        .enumerate()
        .map(|(i, description)| {
            ResumeRecord::new(generate_id(RESUME_ID_PREFIX, i + 1), description)
        })
        .collect();
    info!("Loaded {} resumes from {}", resumes.len(), path.display());
    Ok(resumes)
}
