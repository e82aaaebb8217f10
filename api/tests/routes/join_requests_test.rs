use crate::helpers::make_test_app;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn request_then_accept_a_chat_room() {
    let app = make_test_app().await;
    let owner = app.profile("owner@example.com", "Owner", &[], None, None).await;
    let alex = app.profile("alex@example.com", "Alex Johnson", &[], None, None).await;
    let room = app.chat_room("Calculus Crew", &["Mathematics"], None, owner.id).await;

    let status_uri = format!("/api/users/{}/join_requests/chat_room/{}", alex.id, room.id);
    let (_, json) = app.get(&status_uri).await;
    assert_eq!(json["data"]["status"], "none");

    let body = json!({ "kind": "chat_room", "candidate_id": room.id });
    let create_uri = format!("/api/users/{}/join_requests", alex.id);
    let (status, json) = app.send_json("POST", &create_uri, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["status"], "pending");

    // Repeating the request changes nothing.
    let (status, _) = app.send_json("POST", &create_uri, body).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, json) = app.get(&create_uri).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let accept_uri = format!("{status_uri}/accept");
    let (status, _) = app
        .send_json("PUT", &accept_uri, json!({ "approver_id": alex.id }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = app
        .send_json("PUT", &accept_uri, json!({ "approver_id": owner.id }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "accepted");

    let (_, json) = app.get(&status_uri).await;
    assert_eq!(json["data"]["status"], "accepted");
}

#[tokio::test]
async fn self_requests_conflict() {
    let app = make_test_app().await;
    let alex = app.profile("alex@example.com", "Alex Johnson", &[], None, None).await;

    let (status, _) = app
        .send_json(
            "POST",
            &format!("/api/users/{}/join_requests", alex.id),
            json!({ "kind": "user", "candidate_id": alex.id }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_candidates_and_kinds_fail() {
    let app = make_test_app().await;
    let alex = app.profile("alex@example.com", "Alex Johnson", &[], None, None).await;

    let (status, _) = app
        .send_json(
            "POST",
            &format!("/api/users/{}/join_requests", alex.id),
            json!({ "kind": "user", "candidate_id": 404 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/api/users/{}/join_requests/forum/1", alex.id))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn accepting_without_a_request_is_not_found() {
    let app = make_test_app().await;
    let alex = app.profile("alex@example.com", "Alex Johnson", &[], None, None).await;
    let emily = app.profile("emily@example.com", "Emily Smith", &[], None, None).await;

    let (status, _) = app
        .send_json(
            "PUT",
            &format!("/api/users/{}/join_requests/user/{}/accept", alex.id, emily.id),
            json!({ "approver_id": emily.id }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
