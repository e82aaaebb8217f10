use serde::{Deserialize, Serialize};
use services::matching::{CandidateKind, CandidateRef, RequestStatus};

#[derive(Debug, Deserialize)]
pub struct CreateJoinRequest {
    pub kind: CandidateKind,
    pub candidate_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AcceptJoinRequest {
    pub approver_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RequestStatusResponse {
    pub candidate: CandidateRef,
    pub status: RequestStatus,
}

/// Parses the `{kind}` path segment.
pub fn parse_candidate(kind: &str, candidate_id: i64) -> Result<CandidateRef, String> {
    CandidateKind::parse(kind)
        .map(|kind| CandidateRef { kind, id: candidate_id })
        .ok_or_else(|| format!("Unknown candidate kind '{kind}', expected user or chat_room"))
}
