use crate::helpers::{TestApp, make_test_app};
use axum::http::StatusCode;
use serde_json::{Value, json};
use serial_test::serial;
use util::config::AppConfig;

struct Seeded {
    app: TestApp,
    jamie: i64,
}

async fn seeded() -> Seeded {
    let app = make_test_app().await;
    let jamie = app
        .profile("jamie@example.com", "Jamie Lee", &["Mathematics", "Physics"], Some("Visual"), Some("Evenings"))
        .await;
    app.profile("alex@example.com", "Alex Johnson", &["Mathematics", "Physics"], Some("Visual"), Some("Evenings"))
        .await;
    app.profile("emily@example.com", "Emily Smith", &["Biology", "Chemistry"], Some("Auditory"), Some("Weekends"))
        .await;
    let michael = app
        .profile(
            "michael@example.com",
            "Michael Brown",
            &["Computer Science", "Mathematics"],
            Some("Kinesthetic"),
            Some("Afternoons"),
        )
        .await;
    app.chat_room("Physics Study Hall", &["Physics"], Some("Visual"), michael.id)
        .await;

    Seeded { app, jamie: jamie.id }
}

fn names(json: &Value) -> Vec<String> {
    json["data"]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
#[serial]
async fn matches_are_ranked_by_score() {
    let s = seeded().await;

    let (status, json) = s.app.get(&format!("/api/users/{}/matches", s.jamie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&json),
        vec!["Alex Johnson", "Physics Study Hall", "Michael Brown", "Emily Smith"]
    );

    let top = &json["data"]["matches"][0];
    assert_eq!(top["compatibility_score"], 100);
    assert_eq!(top["candidate"]["kind"], "user");
    assert_eq!(top["shared_subjects"], json!(["Mathematics", "Physics"]));
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(json["data"]["options"]["study_times"], json!(["Afternoons", "Evenings", "Weekends"]));
}

#[tokio::test]
#[serial]
async fn filters_and_sort_come_from_the_query() {
    let s = seeded().await;

    let uri = format!("/api/users/{}/matches?subjects=Mathematics&sort=name", s.jamie);
    let (status, json) = s.app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Alex Johnson", "Michael Brown"]);

    let uri = format!("/api/users/{}/matches?query=phys&scope=chat_rooms", s.jamie);
    let (_, json) = s.app.get(&uri).await;
    assert_eq!(names(&json), vec!["Physics Study Hall"]);
}

#[tokio::test]
#[serial]
async fn results_are_paginated() {
    let s = seeded().await;
    AppConfig::set_match_page_size(2);

    let (_, json) = s.app.get(&format!("/api/users/{}/matches?page=2", s.jamie)).await;
    assert_eq!(names(&json), vec!["Michael Brown", "Emily Smith"]);
    assert_eq!(json["data"]["per_page"], 2);
    assert_eq!(json["data"]["total"], 4);

    AppConfig::reset();
}

#[tokio::test]
#[serial]
async fn pages_past_the_end_are_empty() {
    let s = seeded().await;

    let uri = format!("/api/users/{}/matches?page={}&per_page=100", s.jamie, u64::MAX);
    let (status, json) = s.app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&json).is_empty());
    assert_eq!(json["data"]["page"], u64::MAX);
    assert_eq!(json["data"]["total"], 4);
}

#[tokio::test]
#[serial]
async fn bad_query_values_are_rejected() {
    let s = seeded().await;

    let (status, _) = s.app.get(&format!("/api/users/{}/matches?sort=age", s.jamie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = s.app.get(&format!("/api/users/{}/matches?scope=forums", s.jamie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn unknown_user_has_no_matches() {
    let s = seeded().await;

    let (status, json) = s.app.get("/api/users/999/matches").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}
