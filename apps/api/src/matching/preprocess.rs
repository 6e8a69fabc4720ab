//! Text preprocessing — lowercases descriptions and computes skill-presence vectors.
//!
//! Matching is plain substring containment with no word-boundary check, so "java" is
//! present in "javascript". Both strategies share this behavior.

use crate::matching::vocabulary::Vocabulary;
use crate::models::{JobRecord, ResumeRecord, SkillVector};

/// A record whose description can be normalized and tagged with a skill vector.
pub trait SkillProfile {
    fn description_mut(&mut self) -> &mut String;
    fn set_skill_vector(&mut self, vector: SkillVector);
}

impl SkillProfile for JobRecord {
    fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    fn set_skill_vector(&mut self, vector: SkillVector) {
        self.skill_vector = vector;
    }
}

impl SkillProfile for ResumeRecord {
    fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    fn set_skill_vector(&mut self, vector: SkillVector) {
        self.skill_vector = vector;
    }
}

/// Slot `i` is true iff phrase `i` occurs anywhere in the ASCII-lowercased text.
pub fn compute_presence_vector(description: &str, vocabulary: &Vocabulary) -> SkillVector {
    let text = description.to_ascii_lowercase();
    vocabulary
        .phrases()
        .iter()
        .map(|phrase| text.contains(phrase.as_str()))
        .collect()
}

/// Lowercases every description in place and stores its presence vector.
pub fn preprocess<R: SkillProfile>(records: &mut [R], vocabulary: &Vocabulary) {
    for record in records.iter_mut() {
        let description = record.description_mut();
        description.make_ascii_lowercase();
        let vector = compute_presence_vector(description, vocabulary);
        record.set_skill_vector(vector);
    }
}
