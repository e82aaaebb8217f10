//! Filtering and ordering of scored candidates.
//!
//! [`rank`] applies the search, subject, learning-style and study-time
//! predicates of a [`FilterState`] and then sorts what is left. Each
//! predicate only looks at one candidate, so the order they run in does not
//! change the result.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::profile::{CandidateProfile, ScoredCandidate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Highest score first.
    #[default]
    #[serde(rename = "score")]
    ByScoreDescending,
    /// Byte-wise ascending by display name.
    #[serde(rename = "name")]
    ByNameAscending,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "score" => Some(SortKey::ByScoreDescending),
            "name" => Some(SortKey::ByNameAscending),
            _ => None,
        }
    }
}

/// What the user is currently filtering on. Empty sets do not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub sort_key: SortKey,
    pub subject_filters: BTreeSet<String>,
    pub learning_style_filters: BTreeSet<String>,
    pub study_time_filters: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subject_filters = subjects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_learning_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.learning_style_filters = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_study_times<I, S>(mut self, times: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.study_time_filters = times.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive substring match against the name or any subject.
    pub fn matches_search(&self, candidate: &ScoredCandidate) -> bool {
        let query = self.search_query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        candidate.name().to_lowercase().contains(&query)
            || candidate
                .profile
                .attributes
                .subjects
                .iter()
                .any(|s| s.to_lowercase().contains(&query))
    }

    pub fn matches_subjects(&self, candidate: &ScoredCandidate) -> bool {
        self.subject_filters.is_empty()
            || candidate
                .profile
                .attributes
                .subjects
                .iter()
                .any(|s| self.subject_filters.contains(s))
    }

    pub fn matches_learning_style(&self, candidate: &ScoredCandidate) -> bool {
        if self.learning_style_filters.is_empty() {
            return true;
        }
        candidate
            .profile
            .attributes
            .learning_style
            .as_ref()
            .is_some_and(|style| self.learning_style_filters.contains(style.label()))
    }

    pub fn matches_study_time(&self, candidate: &ScoredCandidate) -> bool {
        if self.study_time_filters.is_empty() {
            return true;
        }
        candidate
            .profile
            .attributes
            .study_time
            .as_ref()
            .is_some_and(|time| self.study_time_filters.contains(time))
    }

    pub fn accepts(&self, candidate: &ScoredCandidate) -> bool {
        self.matches_search(candidate)
            && self.matches_subjects(candidate)
            && self.matches_learning_style(candidate)
            && self.matches_study_time(candidate)
    }

    /// True when nothing would be filtered out.
    pub fn is_unrestricted(&self) -> bool {
        self.search_query.is_empty()
            && self.subject_filters.is_empty()
            && self.learning_style_filters.is_empty()
            && self.study_time_filters.is_empty()
    }
}

fn compare(sort_key: SortKey, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    let primary = match sort_key {
        SortKey::ByScoreDescending => b.compatibility_score.cmp(&a.compatibility_score),
        SortKey::ByNameAscending => a.name().as_bytes().cmp(b.name().as_bytes()),
    };
    primary.then_with(|| a.candidate().cmp(&b.candidate()))
}

/// Filters and orders `candidates` according to `filters`.
pub fn rank(candidates: Vec<ScoredCandidate>, filters: &FilterState) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = candidates.into_iter().filter(|c| filters.accepts(c)).collect();
    ranked.sort_by(|a, b| compare(filters.sort_key, a, b));
    ranked
}

/// The values a client can offer as filter choices for a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub subjects: Vec<String>,
    pub learning_styles: Vec<String>,
    pub study_times: Vec<String>,
}

impl FilterOptions {
    pub fn from_candidates<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a CandidateProfile>,
    {
        let mut subjects = BTreeSet::new();
        let mut learning_styles = BTreeSet::new();
        let mut study_times = BTreeSet::new();

        for candidate in candidates {
            let attrs = &candidate.attributes;
            subjects.extend(attrs.subjects.iter().cloned());
            if let Some(style) = &attrs.learning_style {
                learning_styles.insert(style.label().to_owned());
            }
            if let Some(time) = &attrs.study_time {
                study_times.insert(time.clone());
            }
        }

        Self {
            subjects: subjects.into_iter().collect(),
            learning_styles: learning_styles.into_iter().collect(),
            study_times: study_times.into_iter().collect(),
        }
    }
}
