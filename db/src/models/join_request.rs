use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A request by one profile to join a chat room or connect with another user.
///
/// One row per `(requester_id, candidate_kind, candidate_id)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "join_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub requester_id: i64,
    pub candidate_kind: CandidateKind,
    pub candidate_id: i64,

    pub status: JoinStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the request targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "candidate_kind_type")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CandidateKind {
    #[sea_orm(string_value = "user")]
    User,

    #[sea_orm(string_value = "chat_room")]
    ChatRoom,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "join_request_status_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum JoinStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "accepted")]
    Accepted,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::RequesterId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Requester,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create_pending(
        db: &DbConn,
        requester_id: i64,
        candidate_kind: CandidateKind,
        candidate_id: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let request = ActiveModel {
            requester_id: Set(requester_id),
            candidate_kind: Set(candidate_kind),
            candidate_id: Set(candidate_id),
            status: Set(JoinStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        request.insert(db).await
    }

    pub async fn find_for(
        db: &DbConn,
        requester_id: i64,
        candidate_kind: CandidateKind,
        candidate_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::RequesterId.eq(requester_id))
            .filter(Column::CandidateKind.eq(candidate_kind))
            .filter(Column::CandidateId.eq(candidate_id))
            .one(db)
            .await
    }

    /// Outgoing requests of one profile, oldest first.
    pub async fn find_by_requester(db: &DbConn, requester_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::RequesterId.eq(requester_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn set_accepted(db: &DbConn, id: i64) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(id).one(db).await?;

        let model = match model {
            Some(m) => m,
            None => return Err(DbErr::RecordNotFound("Join request not found".to_string())),
        };

        let mut active_model: ActiveModel = model.into();
        active_model.status = Set(JoinStatus::Accepted);
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Model as ProfileModel;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn pending_request_can_be_accepted() {
        let db = setup_test_db().await;
        let requester = ProfileModel::create(&db, "r@example.com", "R", &[], None, None)
            .await
            .unwrap();

        let created = Model::create_pending(&db, requester.id, CandidateKind::ChatRoom, 7)
            .await
            .expect("Failed to create request");
        assert_eq!(created.status, JoinStatus::Pending);

        let accepted = Model::set_accepted(&db, created.id).await.unwrap();
        assert_eq!(accepted.status, JoinStatus::Accepted);

        let found = Model::find_for(&db, requester.id, CandidateKind::ChatRoom, 7)
            .await
            .unwrap()
            .expect("request missing");
        assert_eq!(found.status, JoinStatus::Accepted);
        assert!(
            Model::find_for(&db, requester.id, CandidateKind::User, 7)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_request_violates_unique_index() {
        let db = setup_test_db().await;
        let requester = ProfileModel::create(&db, "r@example.com", "R", &[], None, None)
            .await
            .unwrap();

        Model::create_pending(&db, requester.id, CandidateKind::User, 3).await.unwrap();
        let second = Model::create_pending(&db, requester.id, CandidateKind::User, 3).await;
        assert!(second.is_err());

        let all = Model::find_by_requester(&db, requester.id).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn accepting_unknown_request_is_not_found() {
        let db = setup_test_db().await;
        let err = Model::set_accepted(&db, 99).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }

    #[test]
    fn kinds_round_trip_through_strings() {
        use std::str::FromStr;
        assert_eq!(CandidateKind::ChatRoom.to_string(), "chat_room");
        assert_eq!(CandidateKind::from_str("USER").unwrap(), CandidateKind::User);
        assert!(CandidateKind::from_str("forum").is_err());
    }
}
