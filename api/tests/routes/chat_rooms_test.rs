use crate::helpers::make_test_app;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_list_chat_rooms() {
    let app = make_test_app().await;
    let owner = app.profile("owner@example.com", "Owner", &[], None, None).await;

    let (status, json) = app
        .send_json(
            "POST",
            "/api/chat_rooms",
            json!({
                "name": "Calculus Crew",
                "subjects": ["Mathematics"],
                "learning_style": "Visual",
                "created_by": owner.id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["created_by"], owner.id);

    let (status, json) = app.get("/api/chat_rooms").await;
    assert_eq!(status, StatusCode::OK);
    let rooms = json["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "Calculus Crew");
    assert_eq!(rooms[0]["subjects"], json!(["Mathematics"]));
}

#[tokio::test]
async fn unknown_owner_is_not_found() {
    let app = make_test_app().await;

    let (status, _) = app
        .send_json("POST", "/api/chat_rooms", json!({ "name": "Orphans", "created_by": 77 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_room_name_is_rejected() {
    let app = make_test_app().await;
    let owner = app.profile("owner@example.com", "Owner", &[], None, None).await;

    let (status, json) = app
        .send_json("POST", "/api/chat_rooms", json!({ "name": "", "created_by": owner.id }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Room name must be between 1 and 100 characters");
}
