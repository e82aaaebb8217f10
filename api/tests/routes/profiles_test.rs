use crate::helpers::make_test_app;
use api::routes::common::db_error;
use axum::http::StatusCode;
use db::models::profile::Model as ProfileModel;
use serde_json::json;

#[tokio::test]
async fn create_then_fetch_profile() {
    let app = make_test_app().await;

    let (status, json) = app
        .send_json(
            "POST",
            "/api/profiles",
            json!({
                "email": "alex@example.com",
                "full_name": "Alex Johnson",
                "subjects": ["Mathematics", "Physics"],
                "learning_style": "Visual",
                "study_time": "Evenings",
                "university": "University of Pretoria",
                "major": "Physics",
                "bio": "Night owl"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["university"], "University of Pretoria");
    assert_eq!(json["data"]["major"], "Physics");
    assert_eq!(json["data"]["bio"], "Night owl");
    let id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = app.get(&format!("/api/profiles/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["full_name"], "Alex Johnson");
    assert_eq!(json["data"]["subjects"], json!(["Mathematics", "Physics"]));
}

#[tokio::test]
async fn invalid_profile_is_rejected() {
    let app = make_test_app().await;

    let (status, json) = app
        .send_json("POST", "/api/profiles", json!({ "email": "nope", "full_name": "X" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid email format");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = make_test_app().await;
    app.profile("dup@example.com", "First", &[], None, None).await;

    let (status, _) = app
        .send_json(
            "POST",
            "/api/profiles",
            json!({ "email": "dup@example.com", "full_name": "Second" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let app = make_test_app().await;
    let emily = app
        .profile("emily@example.com", "Emily Smith", &["Biology"], Some("Auditory"), Some("Weekends"))
        .await;

    let (status, json) = app
        .send_json(
            "PUT",
            &format!("/api/profiles/{}", emily.id),
            json!({ "subjects": ["Biology", "Chemistry"] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["subjects"], json!(["Biology", "Chemistry"]));
    assert_eq!(json["data"]["study_time"], "Weekends");
}

#[tokio::test]
async fn missing_profile_is_not_found() {
    let app = make_test_app().await;

    let (status, _) = app.get("/api/profiles/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send_json("PUT", "/api/profiles/42", json!({ "study_time": "Mornings" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn racing_duplicate_insert_maps_to_conflict() {
    let app = make_test_app().await;
    app.profile("race@example.com", "First", &[], None, None).await;

    let err = ProfileModel::create(&app.db, "race@example.com", "Second", &[], None, None)
        .await
        .unwrap_err();
    let response = db_error(err);
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
