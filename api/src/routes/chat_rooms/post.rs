use super::common::{ChatRoomResponse, CreateChatRoomRequest};
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::{chat_room::Model as ChatRoomModel, profile::Model as ProfileModel};
use tracing::info;
use util::state::AppState;
use validator::Validate;

/// POST /api/chat_rooms
///
/// Creates a study chat room owned by `created_by`.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Calculus Crew",
///   "subjects": ["Mathematics"],
///   "learning_style": "Visual",
///   "study_time": "Evenings",
///   "created_by": 2
/// }
/// ```
///
/// ### Response: 201 Created
/// The stored room.
///
/// ### Errors
/// - 400 Bad Request: validation failure
/// - 404 Not Found: `created_by` is not a known profile
pub async fn create_chat_room(
    State(app_state): State<AppState>,
    Json(req): Json<CreateChatRoomRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return ApiResponse::failure(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let db = app_state.db();
    match ProfileModel::find_by_id(db, req.created_by).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::failure(
                StatusCode::NOT_FOUND,
                format!("Profile {} not found", req.created_by),
            );
        }
        Err(e) => return db_error(e),
    }

    match ChatRoomModel::create(
        db,
        &req.name,
        &req.subjects,
        req.learning_style.as_deref(),
        req.study_time.as_deref(),
        req.created_by,
    )
    .await
    {
        Ok(room) => {
            info!(room_id = room.id, owner = room.created_by, "Chat room created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    ChatRoomResponse::from(room),
                    "Chat room created successfully",
                )),
            )
                .into_response()
        }
        Err(e) => db_error(e),
    }
}
