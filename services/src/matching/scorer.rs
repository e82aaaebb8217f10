//! Compatibility scoring.
//!
//! A score is built from three weighted components:
//!
//! - **subjects**: the share of the combined subject set both sides study,
//!   `round_half_up(overlap * weight / union)`;
//! - **learning style**: the full weight when both styles are set and equal
//!   ignoring case;
//! - **study time**: the full weight when both labels are set and equal
//!   ignoring case. There is no partial credit for neighbouring slots.
//!
//! Subjects are compared after trimming and lowercasing, and a subject listed
//! twice on one side still counts once.

use std::collections::BTreeSet;

use super::profile::{CandidateProfile, MatchProfile, ScoredCandidate};

pub const MAX_SCORE: u8 = 100;

/// Points available per dimension. Always sums to [`MAX_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    subjects: u8,
    learning_style: u8,
    study_time: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            subjects: 60,
            learning_style: 25,
            study_time: 15,
        }
    }
}

impl ScoringWeights {
    /// Custom weights. Returns `None` unless the three add up to 100.
    pub fn new(subjects: u8, learning_style: u8, study_time: u8) -> Option<Self> {
        let total = subjects as u16 + learning_style as u16 + study_time as u16;
        if total != MAX_SCORE as u16 {
            return None;
        }
        Some(Self {
            subjects,
            learning_style,
            study_time,
        })
    }

    pub fn subjects(&self) -> u8 {
        self.subjects
    }

    pub fn learning_style(&self) -> u8 {
        self.learning_style
    }

    pub fn study_time(&self) -> u8 {
        self.study_time
    }
}

fn subject_key(subject: &str) -> String {
    subject.trim().to_lowercase()
}

fn subject_keys(subjects: &[String]) -> BTreeSet<String> {
    subjects
        .iter()
        .map(|s| subject_key(s))
        .filter(|s| !s.is_empty())
        .collect()
}

fn labels_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// Scores `candidate` against `requester` with the default weights.
pub fn score(requester: &MatchProfile, candidate: &MatchProfile) -> u8 {
    score_with(&ScoringWeights::default(), requester, candidate)
}

pub fn score_with(weights: &ScoringWeights, requester: &MatchProfile, candidate: &MatchProfile) -> u8 {
    let ours = subject_keys(&requester.subjects);
    let theirs = subject_keys(&candidate.subjects);

    let overlap = ours.intersection(&theirs).count() as u32;
    let union = ours.union(&theirs).count() as u32;

    let subject_points = if union == 0 {
        0
    } else {
        let weight = weights.subjects as u32;
        (2 * overlap * weight + union) / (2 * union)
    };

    let style_points = match (&requester.learning_style, &candidate.learning_style) {
        (Some(a), Some(b)) if a.matches(b) => weights.learning_style as u32,
        _ => 0,
    };

    let time_points = if labels_match(requester.study_time.as_deref(), candidate.study_time.as_deref()) {
        weights.study_time as u32
    } else {
        0
    };

    (subject_points + style_points + time_points).min(MAX_SCORE as u32) as u8
}

/// Candidate subjects the requester also studies, in ascending order.
///
/// Reported with the candidate's spelling, one entry per distinct subject.
pub fn shared_subjects(requester: &MatchProfile, candidate: &MatchProfile) -> Vec<String> {
    let ours = subject_keys(&requester.subjects);
    let mut seen = BTreeSet::new();
    let mut shared: Vec<String> = candidate
        .subjects
        .iter()
        .map(|s| s.trim())
        .filter(|s| {
            let key = subject_key(s);
            ours.contains(&key) && seen.insert(key)
        })
        .map(str::to_owned)
        .collect();
    shared.sort();
    shared
}

/// Scores every candidate in the pool. Output order follows input order.
pub fn score_candidates(
    weights: &ScoringWeights,
    requester: &MatchProfile,
    candidates: Vec<CandidateProfile>,
) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|profile| ScoredCandidate {
            shared_subjects: shared_subjects(requester, &profile.attributes),
            compatibility_score: score_with(weights, requester, &profile.attributes),
            profile,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::profile::CandidateRef;

    fn profile(subjects: &[&str], style: Option<&str>, time: Option<&str>) -> MatchProfile {
        MatchProfile::from_raw(subjects, style, time)
    }

    #[test]
    fn identical_profiles_score_the_maximum() {
        let a = profile(&["Math", "Physics"], Some("Visual"), Some("Evenings"));
        let b = profile(&["Math", "Physics"], Some("Visual"), Some("Evenings"));
        assert_eq!(score(&a, &b), 100);
    }

    #[test]
    fn disjoint_profiles_score_zero() {
        let a = profile(&["Math"], Some("Visual"), Some("Evenings"));
        let b = profile(&["History"], Some("Kinesthetic"), Some("Mornings"));
        assert_eq!(score(&a, &b), 0);
    }

    #[test]
    fn partial_subject_overlap_rounds_half_up() {
        // 1 shared out of 3 distinct: 60 / 3 = 20
        let a = profile(&["Math", "Physics"], None, None);
        let b = profile(&["Math", "Biology"], None, None);
        assert_eq!(score(&a, &b), 20);

        // 1 shared out of 8 distinct: 7.5 rounds to 8
        let a = profile(&["A", "B", "C", "D", "E"], None, None);
        let b = profile(&["A", "F", "G", "H"], None, None);
        assert_eq!(score(&a, &b), 8);
    }

    #[test]
    fn subjects_compare_ignoring_case_and_duplicates() {
        let a = profile(&["math", "Math ", "PHYSICS"], None, None);
        let b = profile(&["Math", "Physics"], None, None);
        assert_eq!(score(&a, &b), 60);
    }

    #[test]
    fn style_and_time_match_ignoring_case() {
        let a = profile(&[], Some("visual"), Some("evenings"));
        let b = profile(&[], Some("Visual"), Some("EVENINGS"));
        assert_eq!(score(&a, &b), 40);
    }

    #[test]
    fn missing_attributes_never_match() {
        let a = profile(&[], None, None);
        let b = profile(&[], None, None);
        assert_eq!(score(&a, &b), 0);

        let c = profile(&[], Some("Visual"), None);
        assert_eq!(score(&a, &c), 0);
    }

    #[test]
    fn custom_weights_must_sum_to_one_hundred() {
        assert!(ScoringWeights::new(50, 30, 30).is_none());
        assert!(ScoringWeights::new(255, 255, 255).is_none());

        let weights = ScoringWeights::new(100, 0, 0).unwrap();
        let a = profile(&["Math"], Some("Visual"), Some("Evenings"));
        let b = profile(&["Math"], Some("Auditory"), Some("Mornings"));
        assert_eq!(score_with(&weights, &a, &b), 100);
    }

    #[test]
    fn shared_subjects_are_sorted_and_distinct() {
        let a = profile(&["physics", "math", "art"], None, None);
        let b = profile(&["Physics", "Math", "math", "Biology"], None, None);
        assert_eq!(shared_subjects(&a, &b), vec!["Math", "Physics"]);
    }

    #[test]
    fn score_candidates_keeps_input_order() {
        let requester = profile(&["Mathematics"], Some("Visual"), None);
        let pool = vec![
            CandidateProfile::new(CandidateRef::user(2), "B", profile(&["History"], None, None)),
            CandidateProfile::new(
                CandidateRef::chat_room(1),
                "Calculus Crew",
                profile(&["Mathematics"], Some("Visual"), None),
            ),
        ];

        let scored = score_candidates(&ScoringWeights::default(), &requester, pool);
        assert_eq!(scored[0].candidate(), CandidateRef::user(2));
        assert_eq!(scored[0].compatibility_score, 0);
        assert_eq!(scored[1].compatibility_score, 85);
        assert_eq!(scored[1].shared_subjects, vec!["Mathematics"]);
    }
}
