use axum::{Router, routing::get};
use get::get_matches;
use util::state::AppState;

pub mod common;
pub mod get;

/// - `GET /users/{user_id}/matches` → `get_matches`
pub fn matches_routes() -> Router<AppState> {
    Router::new().route("/", get(get_matches))
}
