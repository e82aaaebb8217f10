use async_trait::async_trait;
use db::models::{
    chat_room::Model as ChatRoomModel,
    join_request::{self, JoinStatus, Model as JoinRequestModel},
    profile::Model as ProfileModel,
};
use sea_orm::DatabaseConnection;
use tracing::debug;

use super::profile::{CandidateKind, CandidateProfile, CandidateRef, MatchProfile};
use super::repository::{CandidateRepository, JoinRequestView, RepositoryError, RequestStatus};

impl From<CandidateKind> for join_request::CandidateKind {
    fn from(kind: CandidateKind) -> Self {
        match kind {
            CandidateKind::User => join_request::CandidateKind::User,
            CandidateKind::ChatRoom => join_request::CandidateKind::ChatRoom,
        }
    }
}

impl From<join_request::CandidateKind> for CandidateKind {
    fn from(kind: join_request::CandidateKind) -> Self {
        match kind {
            join_request::CandidateKind::User => CandidateKind::User,
            join_request::CandidateKind::ChatRoom => CandidateKind::ChatRoom,
        }
    }
}

impl From<JoinStatus> for RequestStatus {
    fn from(status: JoinStatus) -> Self {
        match status {
            JoinStatus::Pending => RequestStatus::Pending,
            JoinStatus::Accepted => RequestStatus::Accepted,
        }
    }
}

pub fn profile_attributes(profile: &ProfileModel) -> MatchProfile {
    MatchProfile::from_raw(
        &profile.subject_list(),
        profile.learning_style.as_deref(),
        profile.study_time.as_deref(),
    )
}

pub fn profile_candidate(profile: &ProfileModel) -> CandidateProfile {
    CandidateProfile::new(
        CandidateRef::user(profile.id),
        profile.full_name.clone(),
        profile_attributes(profile),
    )
}

pub fn chat_room_candidate(room: &ChatRoomModel) -> CandidateProfile {
    CandidateProfile::new(
        CandidateRef::chat_room(room.id),
        room.name.clone(),
        MatchProfile::from_raw(
            &room.subject_list(),
            room.learning_style.as_deref(),
            room.study_time.as_deref(),
        ),
    )
}

fn view(request: &JoinRequestModel) -> JoinRequestView {
    JoinRequestView {
        candidate: CandidateRef {
            kind: request.candidate_kind.into(),
            id: request.candidate_id,
        },
        status: request.status.into(),
        requested_at: request.created_at,
    }
}

/// Candidate repository backed by the `profiles`, `chat_rooms` and
/// `join_requests` tables.
#[derive(Debug, Clone)]
pub struct SeaOrmCandidateRepository {
    db: DatabaseConnection,
}

impl SeaOrmCandidateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile id allowed to accept requests for `candidate`.
    async fn approver_of(&self, candidate: CandidateRef) -> Result<i64, RepositoryError> {
        match candidate.kind {
            CandidateKind::User => ProfileModel::find_by_id(&self.db, candidate.id)
                .await?
                .map(|p| p.id)
                .ok_or_else(|| RepositoryError::NotFound(format!("User {} not found", candidate.id))),
            CandidateKind::ChatRoom => ChatRoomModel::find_by_id(&self.db, candidate.id)
                .await?
                .map(|r| r.created_by)
                .ok_or_else(|| RepositoryError::NotFound(format!("Chat room {} not found", candidate.id))),
        }
    }

    async fn ensure_profile(&self, user_id: i64) -> Result<ProfileModel, RepositoryError> {
        ProfileModel::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("User {user_id} not found")))
    }
}

#[async_trait]
impl CandidateRepository for SeaOrmCandidateRepository {
    async fn find_profile(&self, user_id: i64) -> Result<MatchProfile, RepositoryError> {
        let profile = self.ensure_profile(user_id).await?;
        Ok(profile_attributes(&profile))
    }

    async fn list_candidates(&self, requester_id: i64) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let profiles = ProfileModel::find_all_except(&self.db, requester_id).await?;
        let rooms = ChatRoomModel::find_all(&self.db).await?;

        let mut candidates: Vec<CandidateProfile> = profiles.iter().map(profile_candidate).collect();
        candidates.extend(rooms.iter().map(chat_room_candidate));
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
        self.ensure_profile(requester_id).await?;
        self.approver_of(candidate).await?;

        let kind = candidate.kind.into();
        if JoinRequestModel::find_for(&self.db, requester_id, kind, candidate.id)
            .await?
            .is_some()
        {
            debug!(requester_id, %candidate, "Join request already recorded");
            return Ok(());
        }

        match JoinRequestModel::create_pending(&self.db, requester_id, kind, candidate.id).await {
            Ok(_) => Ok(()),
            // Lost a race with an identical insert; the row exists either way.
            Err(err) => match RepositoryError::from(err) {
                RepositoryError::Conflict(_) => Ok(()),
                other => Err(other),
            },
        }
    }

    async fn request_status(
        &self,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<RequestStatus, RepositoryError> {
        let request = JoinRequestModel::find_for(&self.db, requester_id, candidate.kind.into(), candidate.id).await?;
        Ok(request.map_or(RequestStatus::None, |r| r.status.into()))
    }

    async fn accept_join_request(
        &self,
        approver_id: i64,
        requester_id: i64,
        candidate: CandidateRef,
    ) -> Result<(), RepositoryError> {
        if self.approver_of(candidate).await? != approver_id {
            return Err(RepositoryError::Unauthorized(format!(
                "User {approver_id} cannot accept requests for {candidate}"
            )));
        }

        let request = JoinRequestModel::find_for(&self.db, requester_id, candidate.kind.into(), candidate.id)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("No request from user {requester_id} for {candidate}"))
            })?;

        if request.status == JoinStatus::Accepted {
            return Ok(());
        }

        JoinRequestModel::set_accepted(&self.db, request.id).await?;
        Ok(())
    }

    async fn list_join_requests(&self, requester_id: i64) -> Result<Vec<JoinRequestView>, RepositoryError> {
        let requests = JoinRequestModel::find_by_requester(&self.db, requester_id).await?;
        Ok(requests.iter().map(view).collect())
    }
}
