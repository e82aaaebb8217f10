//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness check
//! - `/profiles` → student profile create, fetch and update
//! - `/chat_rooms` → study chat room create and list
//! - `/users/{user_id}/matches` → ranked compatibility matches
//! - `/users/{user_id}/join_requests` → join/connect requests and approvals
//!
//! There is no authentication layer; the acting user is the `{user_id}` in
//! the path.

use crate::routes::{
    chat_rooms::chat_rooms_routes, health::health_routes, profiles::profiles_routes, users::users_routes,
};
use axum::Router;
use util::state::AppState;

pub mod chat_rooms;
pub mod common;
pub mod health;
pub mod profiles;
pub mod users;

/// Builds the complete `/api` router with its state attached.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/profiles", profiles_routes())
        .nest("/chat_rooms", chat_rooms_routes())
        .nest("/users", users_routes())
        .with_state(app_state)
}
