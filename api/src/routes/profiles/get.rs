use super::common::ProfileResponse;
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::profile::Model as ProfileModel;
use util::state::AppState;

/// GET /api/profiles/{user_id}
///
/// Fetches one student profile. Subjects are returned as a list.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "email": "alex@example.com",
///     "full_name": "Alex Johnson",
///     "bio": null,
///     "university": "University of Pretoria",
///     "major": "Physics",
///     "subjects": ["Mathematics", "Physics"],
///     "learning_style": "Visual",
///     "study_time": "Evenings",
///     "created_at": "2025-10-01T12:00:00+00:00",
///     "updated_at": "2025-10-01T12:00:00+00:00"
///   },
///   "message": "Profile retrieved successfully"
/// }
/// ```
///
/// ### Errors
/// - 404 Not Found: no profile with that id
pub async fn get_profile(State(app_state): State<AppState>, Path(user_id): Path<i64>) -> impl IntoResponse {
    match ProfileModel::find_by_id(app_state.db(), user_id).await {
        Ok(Some(profile)) => Json(ApiResponse::success(
            ProfileResponse::from(profile),
            "Profile retrieved successfully",
        ))
        .into_response(),
        Ok(None) => ApiResponse::failure(StatusCode::NOT_FOUND, format!("Profile {user_id} not found")),
        Err(e) => db_error(e),
    }
}
