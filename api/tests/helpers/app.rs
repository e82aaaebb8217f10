use api::routes::routes;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use db::models::{chat_room::Model as ChatRoomModel, profile::Model as ProfileModel};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

/// Router over a fresh, migrated in-memory database.
pub async fn make_test_app() -> TestApp {
    let db = setup_test_db().await;
    let router = Router::new().nest("/api", routes(AppState::new(db.clone())));
    TestApp { router, db }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn profile(
        &self,
        email: &str,
        name: &str,
        subjects: &[&str],
        style: Option<&str>,
        time: Option<&str>,
    ) -> ProfileModel {
        let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
        ProfileModel::create(&self.db, email, name, &subjects, style, time)
            .await
            .unwrap()
    }

    pub async fn chat_room(&self, name: &str, subjects: &[&str], style: Option<&str>, owner: i64) -> ChatRoomModel {
        let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
        ChatRoomModel::create(&self.db, name, &subjects, style, None, owner)
            .await
            .unwrap()
    }
}
