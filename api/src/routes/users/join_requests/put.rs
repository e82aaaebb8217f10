use super::common::{AcceptJoinRequest, RequestStatusResponse, parse_candidate};
use crate::response::ApiResponse;
use crate::routes::common::{match_service, repository_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::matching::RequestStatus;
use util::state::AppState;

/// PUT /api/users/{user_id}/join_requests/{kind}/{candidate_id}/accept
///
/// Accepts the request `{user_id}` sent to the candidate. The approver must
/// be the requested student, or the owner of the requested chat room.
/// Accepting twice is harmless.
///
/// ### Request Body
/// ```json
/// { "approver_id": 2 }
/// ```
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": { "candidate": { "kind": "chat_room", "id": 3 }, "status": "accepted" },
///   "message": "Join request accepted"
/// }
/// ```
///
/// ### Errors
/// - 400 Bad Request: unknown `{kind}`
/// - 403 Forbidden: approver does not own the candidate
/// - 404 Not Found: no such candidate or no request to accept
pub async fn accept_join_request(
    State(app_state): State<AppState>,
    Path((user_id, kind, candidate_id)): Path<(i64, String, i64)>,
    Json(req): Json<AcceptJoinRequest>,
) -> impl IntoResponse {
    let candidate = match parse_candidate(&kind, candidate_id) {
        Ok(candidate) => candidate,
        Err(msg) => return ApiResponse::failure(StatusCode::BAD_REQUEST, msg),
    };

    match match_service(&app_state)
        .accept_join(req.approver_id, user_id, candidate)
        .await
    {
        Ok(()) => Json(ApiResponse::success(
            RequestStatusResponse {
                candidate,
                status: RequestStatus::Accepted,
            },
            "Join request accepted",
        ))
        .into_response(),
        Err(e) => repository_error(e),
    }
}
