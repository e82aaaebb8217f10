use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use super::profile::{CandidateProfile, CandidateRef, MatchProfile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return RepositoryError::Conflict(detail);
        }
        match err {
            DbErr::RecordNotFound(msg) => RepositoryError::NotFound(msg),
            other => RepositoryError::Unavailable(other.to_string()),
        }
    }
}

/// Where a requester stands with one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    None,
    Pending,
    Accepted,
}

/// An outgoing join request as shown to its requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinRequestView {
    pub candidate: CandidateRef,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
}

/// Source of candidates and sink of join requests.
///
/// Implementations convert whatever their backend stores into typed
/// [`CandidateProfile`]s; nothing above this trait sees raw rows.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Match attributes of one user.
    async fn find_profile(&self, user_id: i64) -> Result<MatchProfile, RepositoryError>;

    /// Every other user and every chat room. Order is unspecified.
    async fn list_candidates(&self, requester_id: i64) -> Result<Vec<CandidateProfile>, RepositoryError>;

    /// Records a pending request. Repeating a request is a no-op.
    async fn record_join_request(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError>;

    async fn request_status(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<RequestStatus, RepositoryError>;

    /// Moves a pending request to accepted.
    ///
    /// `approver_id` must be the requested user, or the owner of the
    /// requested chat room.
    async fn accept_join_request(
        &self,
        approver_id: i64,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError>;

    /// Outgoing requests of `requester_id`, oldest first.
    async fn list_join_requests(&self, requester_id: i64) -> Result<Vec<JoinRequestView>, RepositoryError>;
}
