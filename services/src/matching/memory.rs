use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::profile::{CandidateKind, CandidateProfile, CandidateRef, MatchProfile};
use super::repository::{CandidateRepository, JoinRequestView, RepositoryError, RequestStatus};

#[derive(Debug, Clone)]
struct StoredRequest {
    status: RequestStatus,
    requested_at: DateTime<Utc>,
    sequence: u64,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, CandidateProfile>,
    rooms: BTreeMap<i64, (CandidateProfile, i64)>,
    requests: HashMap<(i64, CandidateRef), StoredRequest>,
    next_sequence: u64,
    unavailable: bool,
}

/// Candidate repository held entirely in memory.
///
/// Useful for tests and for embedding the matcher without a database.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    inner: Mutex<Inner>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, RepositoryError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository lock poisoned".into()))?;
        if inner.unavailable {
            return Err(RepositoryError::Unavailable("repository is offline".into()));
        }
        Ok(inner)
    }

    fn lock_unchecked(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn insert_user(&self, id: i64, name: impl Into<String>, attributes: MatchProfile) {
        let profile = CandidateProfile::new(CandidateRef::user(id), name, attributes);
        self.lock_unchecked().users.insert(id, profile);
    }

    pub fn insert_chat_room(&self, id: i64, name: impl Into<String>, attributes: MatchProfile, owner_id: i64) {
        let profile = CandidateProfile::new(CandidateRef::chat_room(id), name, attributes);
        self.lock_unchecked().rooms.insert(id, (profile, owner_id));
    }

    /// Makes every later call fail with `Unavailable` until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock_unchecked().unavailable = unavailable;
    }
}

impl Inner {
    fn approver_of(&self, candidate: CandidateRef) -> Result<i64, RepositoryError> {
        match candidate.kind {
            CandidateKind::User => self
                .users
                .get(&candidate.id)
                .map(|p| p.candidate.id)
                .ok_or_else(|| RepositoryError::NotFound(format!("User {} not found", candidate.id))),
            CandidateKind::ChatRoom => self
                .rooms
                .get(&candidate.id)
                .map(|(_, owner)| *owner)
                .ok_or_else(|| RepositoryError::NotFound(format!("Chat room {} not found", candidate.id))),
        }
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn find_profile(&self, user_id: i64) -> Result<MatchProfile, RepositoryError> {
        self.lock()?
            .users
            .get(&user_id)
            .map(|p| p.attributes.clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("User {user_id} not found")))
    }

    async fn list_candidates(&self, requester_id: i64) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let inner = self.lock()?;
        let users = inner.users.values().filter(|p| p.candidate.id != requester_id).cloned();
        let rooms = inner.rooms.values().map(|(p, _)| p.clone());
        let candidates = users.chain(rooms).collect();
        Ok(candidates)
    }

    async fn record_join_request(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError> {
        if candidate == CandidateRef::user(requester_id) {
            return Err(RepositoryError::Conflict("Cannot send a request to yourself".into()));
        }

        let mut inner = self.lock()?;
        if !inner.users.contains_key(&requester_id) {
            return Err(RepositoryError::NotFound(format!("User {requester_id} not found")));
        }
        inner.approver_of(candidate)?;

        let key = (requester_id, candidate);
        if !inner.requests.contains_key(&key) {
            let sequence = inner.next_sequence;
            inner.next_sequence += 1;
            inner.requests.insert(
                key,
                StoredRequest {
                    status: RequestStatus::Pending,
                    requested_at: Utc::now(),
                    sequence,
                },
            );
        }
        Ok(())
    }

    async fn request_status(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<RequestStatus, RepositoryError> {
        Ok(self
            .lock()?
            .requests
            .get(&(requester_id, candidate))
            .map_or(RequestStatus::None, |r| r.status))
    }

    async fn accept_join_request(
        &self,
        approver_id: i64,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError> {
        let mut inner = self.lock()?;
        if inner.approver_of(candidate)? != approver_id {
            return Err(RepositoryError::Unauthorized(format!(
                "User {approver_id} cannot accept requests for {candidate}"
            )));
        }

        let request = inner.requests.get_mut(&(requester_id, candidate)).ok_or_else(|| {
            RepositoryError::NotFound(format!("No request from user {requester_id} for {candidate}"))
        })?;
        request.status = RequestStatus::Accepted;
        Ok(())
    }

    async fn list_join_requests(&self, requester_id: i64) -> Result<Vec<JoinRequestView>, RepositoryError> {
        let inner = self.lock()?;
        let mut requests: Vec<(&CandidateRef, &StoredRequest)> = inner
            .requests
            .iter()
            .filter(|((requester, _), _)| *requester == requester_id)
            .map(|((_, candidate), request)| (candidate, request))
            .collect();
        requests.sort_by_key(|(_, request)| request.sequence);

        Ok(requests
            .into_iter()
            .map(|(candidate, request)| JoinRequestView {
                candidate: *candidate,
                status: request.status,
                requested_at: request.requested_at,
            })
            .collect())
    }
}
