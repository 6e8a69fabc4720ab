//! Matcher — greedy best-job assignment for every résumé.
//!
//! Each résumé is scored against every job in store order (O(R × J)); the first job
//! with the strictly highest score wins, so ties resolve to the earliest job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::strategy::MatchStrategy;
use crate::models::{JobRecord, ResumeRecord};

/// Default strict-mode acceptance threshold.
pub const DEFAULT_STRICT_THRESHOLD: f64 = 4.0;

/// Below any achievable score, so the first scanned job always becomes the candidate.
const NO_SCORE: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// When set, a best candidate scoring below `strict_threshold` is rejected.
    pub strict_mode: bool,
    pub strict_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            strict_threshold: DEFAULT_STRICT_THRESHOLD,
        }
    }
}

/// Finds the best job for one résumé. `None` only when `jobs` is empty.
pub fn best_job_for<'a>(
    resume: &ResumeRecord,
    jobs: &'a [JobRecord],
    strategy: &dyn MatchStrategy,
) -> Option<(&'a JobRecord, f64)> {
    let mut best: Option<&JobRecord> = None;
    let mut best_score = NO_SCORE;

    for job in jobs {
        let score = strategy.score(&resume.skill_vector, &job.skill_vector);
        if score > best_score {
            best_score = score;
            best = Some(job);
        }
    }

    best.map(|job| (job, best_score))
}

/// Assigns every résumé its best job, overwriting the previous outcome.
///
/// Both collections must already be preprocessed against `strategy.vocabulary()`.
pub fn match_all(
    resumes: &mut [ResumeRecord],
    jobs: &[JobRecord],
    strategy: &dyn MatchStrategy,
    options: &MatchOptions,
) {
    for resume in resumes.iter_mut() {
        match best_job_for(resume, jobs, strategy) {
            None => resume.clear_match(),
            Some((job, score)) if options.strict_mode && score < options.strict_threshold => {
                debug!(
                    "Resume {} rejected best candidate {} ({score:.2} < {:.2})",
                    resume.id, job.id, options.strict_threshold
                );
                resume.clear_match();
            }
            Some((job, score)) => resume.assign(job, score),
        }
        debug!(
            "Resume {} -> {} ({} skills present, score {:.2})",
            resume.id,
            resume.best_job_label(),
            resume.skill_vector.count_present(),
            resume.best_match_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::preprocess::preprocess;
    use crate::matching::strategy::{KeywordStrategy, WeightedStrategy};
    use crate::matching::vocabulary::{TieredVocabulary, Vocabulary};

    fn keyword(phrases: &[&str]) -> KeywordStrategy {
        KeywordStrategy::new(Vocabulary::new(phrases.iter().copied()).unwrap())
    }

    fn prepared(
        strategy: &dyn MatchStrategy,
        jobs: &[(&str, &str)],
        resumes: &[(&str, &str)],
    ) -> (Vec<JobRecord>, Vec<ResumeRecord>) {
        let mut jobs: Vec<JobRecord> = jobs.iter().map(|(id, d)| JobRecord::new(*id, *d)).collect();
        let mut resumes: Vec<ResumeRecord> = resumes
            .iter()
            .map(|(id, d)| ResumeRecord::new(*id, *d))
            .collect();
        preprocess(&mut jobs, strategy.vocabulary());
        preprocess(&mut resumes, strategy.vocabulary());
        (jobs, resumes)
    }

    #[test]
    fn test_picks_highest_scoring_job() {
        let s = keyword(&["python", "sql", "docker"]);
        let (jobs, mut resumes) = prepared(
            &s,
            &[("J001", "python"), ("J002", "python sql docker"), ("J003", "sql")],
            &[("R001", "Python, SQL and Docker")],
        );
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        assert_eq!(resumes[0].best_job_id.as_deref(), Some("J002"));
        assert_eq!(resumes[0].best_match_score, 3.0);
        assert_eq!(
            resumes[0].best_job_description.as_deref(),
            Some("python sql docker")
        );
    }

    #[test]
    fn test_tie_keeps_earliest_job() {
        let s = keyword(&["python", "sql"]);
        let (jobs, mut resumes) = prepared(
            &s,
            &[("J001", "sql"), ("J002", "python"), ("J003", "python")],
            &[("R001", "python")],
        );
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        assert_eq!(resumes[0].best_job_id.as_deref(), Some("J002"));
    }

    #[test]
    fn test_zero_score_still_assigns_first_job() {
        let s = keyword(&["python"]);
        let (jobs, mut resumes) = prepared(
            &s,
            &[("J001", "cooking"), ("J002", "gardening")],
            &[("R001", "painting")],
        );
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        assert_eq!(resumes[0].best_job_id.as_deref(), Some("J001"));
        assert_eq!(resumes[0].best_match_score, 0.0);
    }

    #[test]
    fn test_no_jobs_leaves_every_resume_unmatched() {
        let s = keyword(&["python"]);
        let (jobs, mut resumes) =
            prepared(&s, &[], &[("R001", "python"), ("R002", "sql")]);
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        for r in &resumes {
            assert!(r.best_job_id.is_none());
            assert!(r.best_job_description.is_none());
            assert_eq!(r.best_match_score, 0.0);
        }
    }

    #[test]
    fn test_no_jobs_clears_previous_assignment() {
        let s = keyword(&["python"]);
        let (jobs, mut resumes) = prepared(&s, &[("J001", "python")], &[("R001", "python")]);
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        assert!(resumes[0].is_matched());
        match_all(&mut resumes, &[], &s, &MatchOptions::default());
        assert!(!resumes[0].is_matched());
    }

    fn strict_fixture() -> (WeightedStrategy, Vec<JobRecord>, Vec<ResumeRecord>) {
        // job_possible = 4*3 + 4*2 = 20 ; matched = 3 + 2 + 2 = 7 -> 3.5
        let tiers = TieredVocabulary::new(
            &["tensorflow", "keras", "mlops", "computer vision"],
            &["python", "sql", "docker", "nlp"],
            &[],
        )
        .unwrap();
        let s = WeightedStrategy::new(tiers, 5.0);
        let (jobs, resumes) = prepared(
            &s,
            &[(
                "J001",
                "TensorFlow, Keras, MLOps, computer vision, Python, SQL, Docker, NLP",
            )],
            &[("R001", "tensorflow python sql")],
        );
        (s, jobs, resumes)
    }

    #[test]
    fn test_strict_mode_rejects_below_threshold() {
        let (s, jobs, mut resumes) = strict_fixture();
        let options = MatchOptions {
            strict_mode: true,
            strict_threshold: 4.0,
        };
        match_all(&mut resumes, &jobs, &s, &options);
        assert!(resumes[0].best_job_id.is_none());
        assert_eq!(resumes[0].best_match_score, 0.0);
    }

    #[test]
    fn test_non_strict_keeps_low_score_match() {
        let (s, jobs, mut resumes) = strict_fixture();
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        assert_eq!(resumes[0].best_job_id.as_deref(), Some("J001"));
        assert!((resumes[0].best_match_score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_strict_mode_accepts_above_lower_threshold() {
        let (s, jobs, mut resumes) = strict_fixture();
        let options = MatchOptions {
            strict_mode: true,
            strict_threshold: 3.0,
        };
        match_all(&mut resumes, &jobs, &s, &options);
        assert_eq!(resumes[0].best_job_id.as_deref(), Some("J001"));
    }

    #[test]
    fn test_rescoring_reproduces_best_score() {
        let s = keyword(&["python", "sql", "docker", "git", "java"]);
        let (jobs, mut resumes) = prepared(
            &s,
            &[
                ("J001", "java and git"),
                ("J002", "python sql"),
                ("J003", "docker git python"),
            ],
            &[
                ("R001", "python git docker"),
                ("R002", "java"),
                ("R003", "sql python"),
            ],
        );
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        for r in &resumes {
            let id = r.best_job_id.as_deref().unwrap();
            let job = jobs.iter().find(|j| j.id == id).unwrap();
            assert_eq!(s.score(&r.skill_vector, &job.skill_vector), r.best_match_score);
        }
    }

    #[test]
    fn test_match_all_is_idempotent() {
        let s = keyword(&["python", "sql"]);
        let (jobs, mut resumes) = prepared(
            &s,
            &[("J001", "python"), ("J002", "sql python")],
            &[("R001", "sql"), ("R002", "python")],
        );
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        let first: Vec<_> = resumes
            .iter()
            .map(|r| (r.best_job_id.clone(), r.best_match_score))
            .collect();
        match_all(&mut resumes, &jobs, &s, &MatchOptions::default());
        let second: Vec<_> = resumes
            .iter()
            .map(|r| (r.best_job_id.clone(), r.best_match_score))
            .collect();
        assert_eq!(first, second);
    }
}
