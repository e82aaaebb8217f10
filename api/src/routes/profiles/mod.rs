//! # Profiles Routes Module
//!
//! Routes for `/api/profiles`.
//!
//! - `POST /profiles` → `create_profile`
//! - `GET /profiles/{user_id}` → `get_profile`
//! - `PUT /profiles/{user_id}` → `update_profile`

use axum::{
    Router,
    routing::{get, post},
};
use get::get_profile;
use post::create_profile;
use put::update_profile;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn profiles_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile))
        .route("/{user_id}", get(get_profile).put(update_profile))
}
