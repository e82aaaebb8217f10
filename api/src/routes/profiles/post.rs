use super::common::{CreateProfileRequest, ProfileResponse};
use crate::response::ApiResponse;
use crate::routes::common::db_error;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::profile::{Model as ProfileModel, ProfileDetails};
use tracing::info;
use util::state::AppState;
use validator::Validate;

/// POST /api/profiles
///
/// Creates a student profile.
///
/// ### Request Body
/// ```json
/// {
///   "email": "alex@example.com",
///   "full_name": "Alex Johnson",
///   "subjects": ["Mathematics", "Physics"],
///   "learning_style": "Visual",
///   "study_time": "Evenings",
///   "university": "University of Pretoria"
/// }
/// ```
///
/// `subjects`, `learning_style`, `study_time`, `bio`, `university` and
/// `major` are optional.
///
/// ### Response: 201 Created
/// The stored profile, same shape as `GET /api/profiles/{user_id}`.
///
/// ### Errors
/// - 400 Bad Request: validation failure
/// - 409 Conflict: email already registered
pub async fn create_profile(
    State(app_state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return ApiResponse::failure(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let db = app_state.db();
    match ProfileModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return ApiResponse::failure(
                StatusCode::CONFLICT,
                "A profile with this email already exists",
            );
        }
        Ok(None) => {}
        Err(e) => return db_error(e),
    }

    let details = ProfileDetails {
        bio: req.bio,
        university: req.university,
        major: req.major,
    };
    let profile = match ProfileModel::create_with_details(
        db,
        &req.email,
        &req.full_name,
        &req.subjects,
        req.learning_style.as_deref(),
        req.study_time.as_deref(),
        details,
    )
    .await
    {
        Ok(profile) => profile,
        Err(e) => return db_error(e),
    };

    info!(profile_id = profile.id, "Profile created");
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            ProfileResponse::from(profile),
            "Profile created successfully",
        )),
    )
        .into_response()
}
