use crate::seed::Seeder;
use db::models::{
    chat_room::Model as ChatRoomModel,
    join_request::{CandidateKind, Model as JoinRequestModel},
    profile::Model as ProfileModel,
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct JoinRequestSeeder;

#[async_trait::async_trait]
impl Seeder for JoinRequestSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let profiles = ProfileModel::find_all(db).await?;
        let rooms = ChatRoomModel::find_all(db).await?;

        // Every profile asks to join one room it does not own; every other
        // request gets accepted.
        for (i, profile) in profiles.iter().enumerate() {
            let Some(room) = rooms.iter().find(|r| r.created_by != profile.id) else {
                continue;
            };
            if JoinRequestModel::find_for(db, profile.id, CandidateKind::ChatRoom, room.id)
                .await?
                .is_some()
            {
                continue;
            }
            let request = JoinRequestModel::create_pending(db, profile.id, CandidateKind::ChatRoom, room.id).await?;
            if i % 2 == 0 {
                JoinRequestModel::set_accepted(db, request.id).await?;
            }
        }

        // A couple of pending connection requests between students.
        for pair in profiles.windows(2).take(3) {
            let (from, to) = (&pair[0], &pair[1]);
            if JoinRequestModel::find_for(db, from.id, CandidateKind::User, to.id)
                .await?
                .is_none()
            {
                JoinRequestModel::create_pending(db, from.id, CandidateKind::User, to.id).await?;
            }
        }

        Ok(())
    }
}
