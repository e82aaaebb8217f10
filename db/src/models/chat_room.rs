use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::subjects;

/// A study chat room that students can ask to join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "chat_rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub subjects: String,
    pub learning_style: Option<String>,
    pub study_time: Option<String>,

    /// Owning profile; approves join requests for this room.
    pub created_by: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::CreatedBy",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        subject_list: &[String],
        learning_style: Option<&str>,
        study_time: Option<&str>,
        created_by: i64,
    ) -> Result<Model, DbErr> {
        let room = ActiveModel {
            name: Set(name.trim().to_owned()),
            subjects: Set(subjects::join(subject_list)),
            learning_style: Set(learning_style.map(str::to_owned)),
            study_time: Set(study_time.map(str::to_owned)),
            created_by: Set(created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        room.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All rooms, oldest first.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub fn subject_list(&self) -> Vec<String> {
        subjects::split(&self.subjects)
    }
}
