//! # Users Routes Module
//!
//! Per-user matching endpoints under `/api/users/{user_id}`.
//!
//! - `matches/` → ranked compatibility matches
//! - `join_requests/` → outgoing join requests and approvals

use axum::Router;
use join_requests::join_requests_routes;
use matches::matches_routes;
use util::state::AppState;

pub mod join_requests;
pub mod matches;

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .nest("/{user_id}/matches", matches_routes())
        .nest("/{user_id}/join_requests", join_requests_routes())
}
