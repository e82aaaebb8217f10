//! Typed match attributes.
//!
//! Backend rows are loosely typed (comma-separated subjects, nullable style
//! and time columns). Everything in the matching core works on the types in
//! this module instead; conversion happens once at the repository boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pool a candidate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    User,
    ChatRoom,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::User => "user",
            CandidateKind::ChatRoom => "chat_room",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Some(CandidateKind::User),
            "chat_room" | "chat_rooms" | "room" => Some(CandidateKind::ChatRoom),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a candidate across both pools.
///
/// Ordered by kind, then id. Used as the ranking tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateRef {
    pub kind: CandidateKind,
    pub id: i64,
}

impl CandidateRef {
    pub fn user(id: i64) -> Self {
        Self { kind: CandidateKind::User, id }
    }

    pub fn chat_room(id: i64) -> Self {
        Self { kind: CandidateKind::ChatRoom, id }
    }
}

impl fmt::Display for CandidateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Open string enum of learning styles.
///
/// The three well-known styles are recognised case-insensitively; anything
/// else is kept verbatim (trimmed) in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Other(String),
}

impl LearningStyle {
    /// Parses a stored label. Blank input has no style.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "visual" => LearningStyle::Visual,
            "auditory" => LearningStyle::Auditory,
            "kinesthetic" => LearningStyle::Kinesthetic,
            _ => LearningStyle::Other(trimmed.to_owned()),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Kinesthetic => "Kinesthetic",
            LearningStyle::Other(label) => label,
        }
    }

    /// Case-insensitive label equality.
    pub fn matches(&self, other: &LearningStyle) -> bool {
        self.label().to_lowercase() == other.label().to_lowercase()
    }
}

impl From<String> for LearningStyle {
    fn from(raw: String) -> Self {
        LearningStyle::parse(&raw).unwrap_or(LearningStyle::Other(raw))
    }
}

impl From<LearningStyle> for String {
    fn from(style: LearningStyle) -> Self {
        style.label().to_owned()
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The attributes the scorer compares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchProfile {
    pub subjects: Vec<String>,
    pub learning_style: Option<LearningStyle>,
    pub study_time: Option<String>,
}

impl MatchProfile {
    /// Builds a profile from raw backend values, normalising blanks away.
    pub fn from_raw<S: AsRef<str>>(
        subjects: &[S],
        learning_style: Option<&str>,
        study_time: Option<&str>,
    ) -> Self {
        Self {
            subjects: subjects
                .iter()
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            learning_style: learning_style.and_then(LearningStyle::parse),
            study_time: study_time
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        }
    }
}

/// A user profile or chat room that can be matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate: CandidateRef,
    pub name: String,
    #[serde(flatten)]
    pub attributes: MatchProfile,
}

impl CandidateProfile {
    pub fn new(candidate: CandidateRef, name: impl Into<String>, attributes: MatchProfile) -> Self {
        Self {
            candidate,
            name: name.into(),
            attributes,
        }
    }
}

/// A candidate together with its score against one requester.
///
/// Derived per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub shared_subjects: Vec<String>,
    pub compatibility_score: u8,
}

impl ScoredCandidate {
    pub fn candidate(&self) -> CandidateRef {
        self.profile.candidate
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
