use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;
use crate::models::skills::SkillVector;

/// Display label for a résumé with no assigned job.
pub const NO_MATCH_LABEL: &str = "N/A";

/// A candidate résumé and the outcome of the latest matching run.
///
/// `best_job_id` / `best_job_description` are `None` when the résumé is unmatched,
/// either because no job exists or because strict mode rejected the best candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: String,
    pub description: String,
    pub skill_vector: SkillVector,
    pub best_job_id: Option<String>,
    pub best_job_description: Option<String>,
    pub best_match_score: f64,
}

impl ResumeRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            skill_vector: SkillVector::default(),
            best_job_id: None,
            best_job_description: None,
            best_match_score: 0.0,
        }
    }

    pub fn assign(&mut self, job: &JobRecord, score: f64) {
        self.best_job_id = Some(job.id.clone());
        self.best_job_description = Some(job.description.clone());
        self.best_match_score = score;
    }

    pub fn clear_match(&mut self) {
        self.best_job_id = None;
        self.best_job_description = None;
        self.best_match_score = 0.0;
    }

    pub fn is_matched(&self) -> bool {
        self.best_job_id.is_some()
    }

    pub fn best_job_label(&self) -> &str {
        self.best_job_id.as_deref().unwrap_or(NO_MATCH_LABEL)
    }
}
