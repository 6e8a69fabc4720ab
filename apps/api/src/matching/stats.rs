//! Aggregator — per-job match statistics rebuilt from résumé outcomes.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{JobRecord, ResumeRecord};

/// Recomputes `total_matches`, `total_score` and `average_score` for every job.
///
/// Always a full rebuild from the résumés' current outcomes, so stats left over from an
/// earlier run with another strategy or threshold never leak into this one.
pub fn recompute_job_stats(jobs: &mut [JobRecord], resumes: &[ResumeRecord]) {
    let mut tallies = vec![(0_u32, 0.0_f64); jobs.len()];
    {
        let index: HashMap<&str, usize> = jobs
            .iter()
            .enumerate()
            .rev() // first occurrence wins on duplicate IDs
            .map(|(i, job)| (job.id.as_str(), i))
            .collect();

        for resume in resumes {
            let Some(job_id) = resume.best_job_id.as_deref() else {
                continue;
            };
            match index.get(job_id) {
                Some(&i) => {
                    tallies[i].0 += 1;
                    tallies[i].1 += resume.best_match_score;
                }
                None => warn!(
                    "Resume {} references unknown job {job_id}; skipped in stats",
                    resume.id
                ),
            }
        }
    }

    for (job, (matches, score)) in jobs.iter_mut().zip(tallies) {
        job.set_stats(matches, score);
    }
}
