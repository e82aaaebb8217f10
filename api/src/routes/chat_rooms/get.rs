use super::common::ChatRoomResponse;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{Json, extract::State, response::IntoResponse};
use db::models::chat_room::Model as ChatRoomModel;
use util::state::AppState;

/// GET /api/chat_rooms
///
/// Lists every study chat room, oldest first.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "name": "Calculus Crew",
///       "subjects": ["Mathematics"],
///       "learning_style": "Visual",
///       "study_time": "Evenings",
///       "created_by": 2,
///       "created_at": "2025-10-01T12:00:00+00:00"
///     }
///   ],
///   "message": "Chat rooms retrieved successfully"
/// }
/// ```
pub async fn list_chat_rooms(State(app_state): State<AppState>) -> impl IntoResponse {
    match ChatRoomModel::find_all(app_state.db()).await {
        Ok(rooms) => {
            let rooms: Vec<ChatRoomResponse> = rooms.into_iter().map(ChatRoomResponse::from).collect();
            Json(ApiResponse::success(rooms, "Chat rooms retrieved successfully")).into_response()
        }
        Err(e) => db_error(e),
    }
}
