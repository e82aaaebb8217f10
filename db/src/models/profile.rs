use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::subjects;

/// A student's profile in the `profiles` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Display name shown on match cards.
    pub full_name: String,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    /// Comma-separated subject list, see [`crate::subjects`].
    pub subjects: String,
    /// Visual, Auditory, Kinesthetic or any other label the user typed.
    pub learning_style: Option<String>,
    /// Free-text availability label such as "Evenings".
    pub study_time: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chat_room::Entity")]
    ChatRooms,
}

impl Related<super::chat_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatRooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update of a profile. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub learning_style: Option<String>,
    pub study_time: Option<String>,
}

/// Optional descriptive fields set when a profile is first stored.
#[derive(Debug, Clone, Default)]
pub struct ProfileDetails {
    pub bio: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        email: &str,
        full_name: &str,
        subject_list: &[String],
        learning_style: Option<&str>,
        study_time: Option<&str>,
    ) -> Result<Model, DbErr> {
        Self::create_with_details(
            db,
            email,
            full_name,
            subject_list,
            learning_style,
            study_time,
            ProfileDetails::default(),
        )
        .await
    }

    /// Inserts a profile and its descriptive fields in one statement.
    pub async fn create_with_details(
        db: &DbConn,
        email: &str,
        full_name: &str,
        subject_list: &[String],
        learning_style: Option<&str>,
        study_time: Option<&str>,
        details: ProfileDetails,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let profile = ActiveModel {
            email: Set(email.trim().to_owned()),
            full_name: Set(full_name.trim().to_owned()),
            bio: Set(details.bio),
            university: Set(details.university),
            major: Set(details.major),
            subjects: Set(subjects::join(subject_list)),
            learning_style: Set(learning_style.map(str::to_owned)),
            study_time: Set(study_time.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        profile.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(db)
            .await
    }

    /// All profiles, oldest first.
    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Every profile except `id`, oldest first.
    pub async fn find_all_except(db: &DbConn, id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Id.ne(id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn update(db: &DbConn, id: i64, changes: ProfileChanges) -> Result<Model, DbErr> {
        if Entity::find_by_id(id).one(db).await?.is_none() {
            return Err(DbErr::RecordNotFound(format!("Profile {id} not found")));
        }

        let mut profile = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(full_name) = changes.full_name {
            if full_name.trim().is_empty() {
                return Err(DbErr::Custom("full_name cannot be empty".into()));
            }
            profile.full_name = Set(full_name.trim().to_owned());
        }
        if let Some(bio) = changes.bio {
            profile.bio = Set(Some(bio));
        }
        if let Some(university) = changes.university {
            profile.university = Set(Some(university));
        }
        if let Some(major) = changes.major {
            profile.major = Set(Some(major));
        }
        if let Some(list) = changes.subjects {
            profile.subjects = Set(subjects::join(&list));
        }
        if let Some(style) = changes.learning_style {
            profile.learning_style = Set(Some(style));
        }
        if let Some(time) = changes.study_time {
            profile.study_time = Set(Some(time));
        }

        profile.update(db).await
    }

    /// The stored subject column split into individual subjects.
    pub fn subject_list(&self) -> Vec<String> {
        subjects::split(&self.subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::SqlErr;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| ToString::to_string(s)).collect()
    }

    #[tokio::test]
    async fn create_and_find_profile() {
        let db = setup_test_db().await;
        let created = Model::create(
            &db,
            "alex@example.com",
            "Alex Johnson",
            &list(&["Mathematics", "Physics"]),
            Some("Visual"),
            Some("Evenings"),
        )
        .await
        .expect("Failed to create profile");

        let found = Model::find_by_id(&db, created.id)
            .await
            .expect("query failed")
            .expect("profile missing");
        assert_eq!(found.full_name, "Alex Johnson");
        assert_eq!(found.subjects, "Mathematics, Physics");
        assert_eq!(found.subject_list(), list(&["Mathematics", "Physics"]));

        let by_email = Model::find_by_email(&db, " alex@example.com ").await.unwrap();
        assert_eq!(by_email.map(|p| p.id), Some(created.id));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = setup_test_db().await;
        Model::create(&db, "dup@example.com", "A", &[], None, None).await.unwrap();
        let err = Model::create(&db, "dup@example.com", "B", &[], None, None)
            .await
            .unwrap_err();
        assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    }

    #[tokio::test]
    async fn create_with_details_stores_every_field() {
        let db = setup_test_db().await;
        let created = Model::create_with_details(
            &db,
            "sarah@example.com",
            "Sarah Davis",
            &list(&["History"]),
            None,
            Some("Mornings"),
            ProfileDetails {
                bio: Some("Loves archives".into()),
                university: Some("University of Pretoria".into()),
                major: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.bio.as_deref(), Some("Loves archives"));
        assert_eq!(created.university.as_deref(), Some("University of Pretoria"));
        assert_eq!(created.major, None);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn find_all_except_skips_requester() {
        let db = setup_test_db().await;
        let a = Model::create(&db, "a@example.com", "A", &[], None, None).await.unwrap();
        let b = Model::create(&db, "b@example.com", "B", &[], None, None).await.unwrap();
        let c = Model::create(&db, "c@example.com", "C", &[], None, None).await.unwrap();

        let others = Model::find_all_except(&db, b.id).await.unwrap();
        let ids: Vec<i64> = others.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);

        let everyone = Model::find_all(&db).await.unwrap();
        assert_eq!(everyone.len(), 3);
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let db = setup_test_db().await;
        let created = Model::create(
            &db,
            "emily@example.com",
            "Emily Smith",
            &list(&["Biology"]),
            Some("Auditory"),
            Some("Weekends"),
        )
        .await
        .unwrap();

        let updated = Model::update(
            &db,
            created.id,
            ProfileChanges {
                subjects: Some(list(&["Biology", "Chemistry"])),
                study_time: Some("Mornings".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.full_name, "Emily Smith");
        assert_eq!(updated.learning_style.as_deref(), Some("Auditory"));
        assert_eq!(updated.study_time.as_deref(), Some("Mornings"));
        assert_eq!(updated.subject_list(), list(&["Biology", "Chemistry"]));
    }

    #[tokio::test]
    async fn update_missing_profile_is_not_found() {
        let db = setup_test_db().await;
        let err = Model::update(&db, 404, ProfileChanges::default()).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }
}
