use super::common::{CreateJoinRequest, RequestStatusResponse};
use crate::response::ApiResponse;
use crate::routes::common::{match_service, repository_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::matching::CandidateRef;
use util::state::AppState;

/// POST /api/users/{user_id}/join_requests
///
/// Asks to join a chat room or connect with another student. Sending the
/// same request again is harmless and returns its current status.
///
/// ### Request Body
/// ```json
/// { "kind": "chat_room", "candidate_id": 3 }
/// ```
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "data": { "candidate": { "kind": "chat_room", "id": 3 }, "status": "pending" },
///   "message": "Join request sent"
/// }
/// ```
///
/// ### Errors
/// - 404 Not Found: unknown user or candidate
/// - 409 Conflict: a user cannot request themselves
pub async fn create_join_request(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<CreateJoinRequest>,
) -> impl IntoResponse {
    let candidate = CandidateRef {
        kind: req.kind,
        id: req.candidate_id,
    };
    let service = match_service(&app_state);

    if let Err(e) = service.request_join(user_id, candidate).await {
        return repository_error(e);
    }

    match service.request_status(user_id, candidate).await {
        Ok(status) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                RequestStatusResponse { candidate, status },
                "Join request sent",
            )),
        )
            .into_response(),
        Err(e) => repository_error(e),
    }
}
