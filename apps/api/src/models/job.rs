use serde::{Deserialize, Serialize};

use crate::models::skills::SkillVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub description: String,
    pub skill_vector: SkillVector,
    pub total_matches: u32,
    pub total_score: f64,
    pub average_score: f64,
}

impl JobRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            skill_vector: SkillVector::default(),
            total_matches: 0,
            total_score: 0.0,
            average_score: 0.0,
        }
    }

    /// Overwrites the aggregate stats. `average_score` is always derived here, never patched.
    pub fn set_stats(&mut self, total_matches: u32, total_score: f64) {
        self.total_matches = total_matches;
        self.total_score = total_score;
        self.average_score = if total_matches > 0 {
            total_score / total_matches as f64
        } else {
            0.0
        };
    }
}
