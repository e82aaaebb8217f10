use crate::seed::Seeder;
use db::models::profile::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};

pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Biology",
    "Chemistry",
    "Computer Science",
    "History",
    "Literature",
    "Economics",
];
pub const LEARNING_STYLES: &[&str] = &["Visual", "Auditory", "Kinesthetic"];
pub const STUDY_TIMES: &[&str] = &["Mornings", "Afternoons", "Evenings", "Weekends"];

/// The students shown in the matching demo.
pub const DEMO_PROFILES: &[(&str, &str, &[&str], &str, &str)] = &[
    ("alex.johnson@example.com", "Alex Johnson", &["Mathematics", "Physics"], "Visual", "Evenings"),
    ("emily.smith@example.com", "Emily Smith", &["Biology", "Chemistry"], "Auditory", "Weekends"),
    ("michael.brown@example.com", "Michael Brown", &["Computer Science", "Mathematics"], "Kinesthetic", "Afternoons"),
    ("sarah.davis@example.com", "Sarah Davis", &["History", "Literature"], "Visual", "Mornings"),
    ("david.wilson@example.com", "David Wilson", &["Physics", "Mathematics"], "Auditory", "Evenings"),
];

pub struct ProfileSeeder;

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[fastrand::usize(..items.len())]
}

fn random_subjects() -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for _ in 0..fastrand::usize(1..=3) {
        let subject = pick(SUBJECTS);
        if !subjects.iter().any(|s| s == subject) {
            subjects.push(subject.to_owned());
        }
    }
    subjects
}

#[async_trait::async_trait]
impl Seeder for ProfileSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for (email, name, subjects, style, time) in DEMO_PROFILES {
            if Model::find_by_email(db, email).await?.is_some() {
                continue;
            }
            let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
            Model::create(db, email, name, &subjects, Some(*style), Some(*time)).await?;
        }

        for i in 0..10 {
            let name: String = Name().fake();
            let email = format!("{}.{}", fastrand::u32(..1_000_000) + i, SafeEmail().fake::<String>());
            let style = fastrand::bool().then(|| pick(LEARNING_STYLES));
            let time = fastrand::bool().then(|| pick(STUDY_TIMES));
            Model::create(db, &email, &name, &random_subjects(), style, time).await?;
        }

        Ok(())
    }
}
