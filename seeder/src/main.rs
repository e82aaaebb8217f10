use crate::seed::{Seeder, run_seeder};
use crate::seeds::{chat_room::ChatRoomSeeder, join_request::JoinRequestSeeder, profile::ProfileSeeder};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    for (seeder, name) in [
        (Box::new(ProfileSeeder) as Box<dyn Seeder + Send + Sync>, "Profile"),
        (Box::new(ChatRoomSeeder), "ChatRoom"),
        (Box::new(JoinRequestSeeder), "JoinRequest"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
