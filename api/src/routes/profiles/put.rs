use super::common::{ProfileResponse, UpdateProfileRequest};
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::profile::{Model as ProfileModel, ProfileChanges};
use util::state::AppState;
use validator::Validate;

/// PUT /api/profiles/{user_id}
///
/// Partially updates a profile. Omitted fields are left unchanged.
///
/// ### Request Body
/// ```json
/// {
///   "subjects": ["Biology", "Chemistry"],
///   "study_time": "Weekends"
/// }
/// ```
///
/// ### Response: 200 OK
/// The updated profile.
///
/// ### Errors
/// - 400 Bad Request: validation failure
/// - 404 Not Found: no profile with that id
pub async fn update_profile(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return ApiResponse::failure(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let changes = ProfileChanges {
        full_name: req.full_name,
        bio: req.bio,
        university: req.university,
        major: req.major,
        subjects: req.subjects,
        learning_style: req.learning_style,
        study_time: req.study_time,
    };

    match ProfileModel::update(app_state.db(), user_id, changes).await {
        Ok(profile) => Json(ApiResponse::success(
            ProfileResponse::from(profile),
            "Profile updated successfully",
        ))
        .into_response(),
        Err(e) => db_error(e),
    }
}
