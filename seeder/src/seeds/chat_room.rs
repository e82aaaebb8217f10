use crate::seed::Seeder;
use db::models::{chat_room::Model as ChatRoomModel, profile::Model as ProfileModel};
use sea_orm::{DatabaseConnection, DbErr};

const ROOMS: &[(&str, &[&str], Option<&str>, Option<&str>)] = &[
    ("Calculus Crew", &["Mathematics"], Some("Visual"), Some("Evenings")),
    ("Physics Study Hall", &["Physics", "Mathematics"], Some("Visual"), None),
    ("Organic Chemistry Help", &["Chemistry", "Biology"], Some("Auditory"), Some("Weekends")),
    ("Code Review Circle", &["Computer Science"], Some("Kinesthetic"), Some("Afternoons")),
    ("History Book Club", &["History", "Literature"], None, Some("Mornings")),
];

pub struct ChatRoomSeeder;

#[async_trait::async_trait]
impl Seeder for ChatRoomSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let owners = ProfileModel::find_all(db).await?;
        if owners.is_empty() {
            return Err(DbErr::Custom("Seed profiles before chat rooms".into()));
        }

        for (name, subjects, style, time) in ROOMS {
            let owner = &owners[fastrand::usize(..owners.len())];
            let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
            ChatRoomModel::create(db, name, &subjects, *style, *time, owner.id).await?;
        }

        Ok(())
    }
}
