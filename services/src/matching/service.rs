use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::profile::{CandidateKind, CandidateRef, ScoredCandidate};
use super::ranking::{self, FilterOptions, FilterState};
use super::repository::{CandidateRepository, JoinRequestView, RepositoryError, RequestStatus};
use super::scorer::{self, ScoringWeights};

/// Which candidate pools a match request covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    #[default]
    All,
    Users,
    ChatRooms,
}

impl MatchScope {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(MatchScope::All),
            "users" | "user" => Some(MatchScope::Users),
            "chat_rooms" | "chat_room" | "rooms" => Some(MatchScope::ChatRooms),
            _ => None,
        }
    }

    pub fn includes(&self, kind: CandidateKind) -> bool {
        match self {
            MatchScope::All => true,
            MatchScope::Users => kind == CandidateKind::User,
            MatchScope::ChatRooms => kind == CandidateKind::ChatRoom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResults {
    pub matches: Vec<ScoredCandidate>,
    /// Choices for the filter controls, taken from the unfiltered pool.
    pub options: FilterOptions,
}

/// Loads candidates, scores them against the requester and ranks them.
#[derive(Debug, Clone)]
pub struct MatchService<R> {
    repo: R,
    weights: ScoringWeights,
}

impl<R: CandidateRepository> MatchService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn find_matches(
        &self,
        requester_id: i64,
        scope: MatchScope,
        filters: &FilterState,
    ) -> Result<MatchResults, RepositoryError> {
        let requester = self.repo.find_profile(requester_id).await.inspect_err(|e| {
            warn!(requester_id, error = %e, "Failed to load requester profile");
        })?;

        let pool: Vec<_> = self
            .repo
            .list_candidates(requester_id)
            .await
            .inspect_err(|e| warn!(requester_id, error = %e, "Failed to list candidates"))?
            .into_iter()
            .filter(|c| scope.includes(c.candidate.kind))
            .filter(|c| c.candidate != CandidateRef::user(requester_id))
            .collect();

        let options = FilterOptions::from_candidates(&pool);
        let total = pool.len();
        let scored = scorer::score_candidates(&self.weights, &requester, pool);
        let matches = ranking::rank(scored, filters);

        debug!(
            requester_id,
            ?scope,
            total,
            returned = matches.len(),
            "Ranked match candidates"
        );

        Ok(MatchResults { matches, options })
    }

    pub async fn request_join(&self, requester_id: i64, candidate: CandidateRef) -> Result<(), RepositoryError> {
        self.repo
            .record_join_request(requester_id, candidate)
            .await
            .inspect_err(|e| warn!(requester_id, %candidate, error = %e, "Join request rejected"))?;
        info!(requester_id, %candidate, "Join request recorded");
        Ok(())
    }

    pub async fn request_status(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<RequestStatus, RepositoryError> {
        self.repo.request_status(requester_id, candidate).await
    }

    pub async fn accept_join(
        &self,
        approver_id: i64,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError> {
        self.repo
            .accept_join_request(approver_id, requester_id, candidate)
            .await
            .inspect_err(|e| warn!(approver_id, requester_id, %candidate, error = %e, "Accept rejected"))?;
        info!(approver_id, requester_id, %candidate, "Join request accepted");
        Ok(())
    }

    pub async fn join_requests(&self, requester_id: i64) -> Result<Vec<JoinRequestView>, RepositoryError> {
        self.repo.list_join_requests(requester_id).await
    }
}
