use super::common::{MatchQuery, MatchesResponse};
use crate::response::ApiResponse;
use crate::routes::common::{match_service, repository_error};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use util::{config, state::AppState};

/// GET /api/users/{user_id}/matches
///
/// Scores every other student and every chat room against the user's
/// profile, then filters, sorts and paginates them.
///
/// # Query Parameters
/// - `scope`: `all` (default), `users` or `chat_rooms`.
/// - `query`: case-insensitive search over names and subjects.
/// - `sort`: `score` (default, highest first) or `name` (A to Z).
/// - `subjects`, `learning_styles`, `study_times`: comma-separated lists;
///   a candidate must match at least one entry of each list given.
/// - `page`: defaults to 1.
/// - `per_page`: defaults to `MATCH_PAGE_SIZE`, at most 100.
///
/// `options` lists the subjects, learning styles and study times present in
/// the unfiltered pool, for building filter controls.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "matches": [
///       {
///         "candidate": { "kind": "user", "id": 4 },
///         "name": "Michael Brown",
///         "subjects": ["Computer Science", "Mathematics"],
///         "learning_style": "Kinesthetic",
///         "study_time": "Afternoons",
///         "shared_subjects": ["Mathematics"],
///         "compatibility_score": 20
///       }
///     ],
///     "options": {
///       "subjects": ["Computer Science", "Mathematics"],
///       "learning_styles": ["Kinesthetic"],
///       "study_times": ["Afternoons"]
///     },
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Matches retrieved successfully"
/// }
/// ```
///
/// ### Errors
/// - 400 Bad Request: unknown `scope` or `sort`
/// - 404 Not Found: the user has no profile
/// - 503 Service Unavailable: the database could not be queried
pub async fn get_matches(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<MatchQuery>,
) -> impl IntoResponse {
    let scope = match params.scope() {
        Ok(scope) => scope,
        Err(msg) => return ApiResponse::failure(StatusCode::BAD_REQUEST, msg),
    };
    let filters = match params.filters() {
        Ok(filters) => filters,
        Err(msg) => return ApiResponse::failure(StatusCode::BAD_REQUEST, msg),
    };

    let page = params.page.unwrap_or(1).max(1);
    let per_page = params
        .per_page
        .unwrap_or_else(config::match_page_size)
        .clamp(1, 100);

    let results = match match_service(&app_state).find_matches(user_id, scope, &filters).await {
        Ok(results) => results,
        Err(e) => return repository_error(e),
    };

    let total = results.matches.len() as u64;
    // Pages past the end are empty rather than an overflow.
    let offset = usize::try_from(page.saturating_sub(1).saturating_mul(per_page)).unwrap_or(usize::MAX);
    let matches = results
        .matches
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    let response = MatchesResponse {
        matches,
        options: results.options,
        page,
        per_page,
        total,
    };
    Json(ApiResponse::success(response, "Matches retrieved successfully")).into_response()
}
