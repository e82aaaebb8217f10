use super::common::{RequestStatusResponse, parse_candidate};
use crate::response::ApiResponse;
use crate::routes::common::{match_service, repository_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use util::state::AppState;

/// GET /api/users/{user_id}/join_requests
///
/// Lists the user's outgoing join requests, oldest first.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "candidate": { "kind": "chat_room", "id": 3 },
///       "status": "pending",
///       "requested_at": "2025-10-01T12:00:00Z"
///     }
///   ],
///   "message": "Join requests retrieved successfully"
/// }
/// ```
pub async fn list_join_requests(State(app_state): State<AppState>, Path(user_id): Path<i64>) -> impl IntoResponse {
    match match_service(&app_state).join_requests(user_id).await {
        Ok(requests) => Json(ApiResponse::success(requests, "Join requests retrieved successfully")).into_response(),
        Err(e) => repository_error(e),
    }
}

/// GET /api/users/{user_id}/join_requests/{kind}/{candidate_id}
///
/// Where the user stands with one candidate: `none`, `pending` or
/// `accepted`.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": { "candidate": { "kind": "user", "id": 5 }, "status": "none" },
///   "message": "Request status retrieved successfully"
/// }
/// ```
///
/// ### Errors
/// - 400 Bad Request: unknown `{kind}`
pub async fn get_request_status(
    State(app_state): State<AppState>,
    Path((user_id, kind, candidate_id)): Path<(i64, String, i64)>,
) -> impl IntoResponse {
    let candidate = match parse_candidate(&kind, candidate_id) {
        Ok(candidate) => candidate,
        Err(msg) => return ApiResponse::failure(StatusCode::BAD_REQUEST, msg),
    };

    match match_service(&app_state).request_status(user_id, candidate).await {
        Ok(status) => Json(ApiResponse::success(
            RequestStatusResponse { candidate, status },
            "Request status retrieved successfully",
        ))
        .into_response(),
        Err(e) => repository_error(e),
    }
}
