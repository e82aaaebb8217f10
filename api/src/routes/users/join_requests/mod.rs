//! # Join Requests Routes Module
//!
//! - `GET /users/{user_id}/join_requests` → `list_join_requests`
//! - `POST /users/{user_id}/join_requests` → `create_join_request`
//! - `GET /users/{user_id}/join_requests/{kind}/{candidate_id}` → `get_request_status`
//! - `PUT /users/{user_id}/join_requests/{kind}/{candidate_id}/accept` → `accept_join_request`
//!
//! `{kind}` is `user` or `chat_room`.

use axum::{
    Router,
    routing::{get, put},
};
use get::{get_request_status, list_join_requests};
use post::create_join_request;
use put::accept_join_request;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn join_requests_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_join_requests).post(create_join_request))
        .route("/{kind}/{candidate_id}", get(get_request_status))
        .route("/{kind}/{candidate_id}/accept", put(accept_join_request))
}
