use serde::{Deserialize, Serialize};

/// Boolean skill-presence vector, one slot per vocabulary position.
///
/// Empty until the owning record has been preprocessed against a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillVector(Vec<bool>);

impl SkillVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Number of skills present.
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&present| present).count()
    }
}

impl From<Vec<bool>> for SkillVector {
    fn from(slots: Vec<bool>) -> Self {
        Self(slots)
    }
}

impl FromIterator<bool> for SkillVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_present() {
        let v = SkillVector::from(vec![true, false, true, true]);
        assert_eq!(v.count_present(), 3);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_get_out_of_range_is_false() {
        let v = SkillVector::from(vec![true]);
        assert!(v.get(0));
        assert!(!v.get(5));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let v = SkillVector::from(vec![true, false]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[true,false]");
    }
}
