//! # Chat Rooms Routes Module
//!
//! - `POST /chat_rooms` → `create_chat_room`
//! - `GET /chat_rooms` → `list_chat_rooms`

use axum::{Router, routing::get};
use get::list_chat_rooms;
use post::create_chat_room;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn chat_rooms_routes() -> Router<AppState> {
    Router::new().route("/", get(list_chat_rooms).post(create_chat_room))
}
