//! Record Store: owns the job and résumé collections for the lifetime of the process.
//!
//! Store order is load order and is significant: the matcher breaks score ties by it
//! and the ranker preserves it among equal values.

pub mod handlers;

use crate::matching::pipeline::MatchRunSummary;
use crate::models::{JobRecord, ResumeRecord};

/// Anything addressable by a stable string ID.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for JobRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ResumeRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Linear-scan lookup. Returns `None` on a miss.
pub fn find_by_id<'a, T: Identified>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

#[derive(Debug, Default)]
pub struct RecordStore {
    pub jobs: Vec<JobRecord>,
    pub resumes: Vec<ResumeRecord>,
    /// Summary of the most recent matching run, if any.
    pub last_run: Option<MatchRunSummary>,
}

impl RecordStore {
    pub fn new(jobs: Vec<JobRecord>, resumes: Vec<ResumeRecord>) -> Self {
        Self {
            jobs,
            resumes,
            last_run: None,
        }
    }

    pub fn find_job(&self, id: &str) -> Option<&JobRecord> {
        find_by_id(&self.jobs, id)
    }

    pub fn find_resume(&self, id: &str) -> Option<&ResumeRecord> {
        find_by_id(&self.resumes, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> RecordStore {
        RecordStore::new(
            vec![
                JobRecord::new("J001", "python"),
                JobRecord::new("J002", "sql"),
            ],
            vec![ResumeRecord::new("R001", "python")],
        )
    }

    #[test]
    fn test_find_job_hit() {
        let store = sample_store();
        let job = store.find_job("J002").unwrap();
        assert_eq!(job.description, "sql");
    }

    #[test]
    fn test_find_miss_is_none() {
        let store = sample_store();
        assert!(store.find_job("J999").is_none());
        assert!(store.find_resume("J001").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let jobs = vec![JobRecord::new("J001", "first"), JobRecord::new("J001", "second")];
        assert_eq!(find_by_id(&jobs, "J001").unwrap().description, "first");
    }

    #[test]
    fn test_find_by_id_on_empty_collection() {
        let resumes: Vec<ResumeRecord> = vec![];
        assert!(find_by_id(&resumes, "R001").is_none());
    }
}
