//! Compatibility matching between students and study chat rooms.
//!
//! Data flows one way: a [`CandidateRepository`] supplies typed candidates,
//! [`scorer`] gives each a score against the requester, and [`ranking`]
//! filters and orders the result. [`MatchService`] wires the three together.
//!
//! Scoring and ranking are synchronous and pure; repository calls are the
//! only suspension points.

pub mod memory;
pub mod profile;
pub mod ranking;
pub mod repository;
pub mod scorer;
pub mod service;
pub mod store;

pub use memory::InMemoryCandidateRepository;
pub use profile::{CandidateKind, CandidateProfile, CandidateRef, LearningStyle, MatchProfile, ScoredCandidate};
pub use ranking::{rank, FilterOptions, FilterState, SortKey};
pub use repository::{CandidateRepository, JoinRequestView, RepositoryError, RequestStatus};
pub use scorer::{score, ScoringWeights};
pub use service::{MatchResults, MatchScope, MatchService};
pub use store::SeaOrmCandidateRepository;
