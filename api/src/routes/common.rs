//! Helpers shared by the route groups.

use crate::response::ApiResponse;
use axum::{http::StatusCode, response::Response};
use db::DbErr;
use sea_orm::SqlErr;
use services::matching::{MatchService, RepositoryError, SeaOrmCandidateRepository};
use tracing::{error, warn};
use util::state::AppState;

/// Match service over the request's database handle.
pub fn match_service(state: &AppState) -> MatchService<SeaOrmCandidateRepository> {
    MatchService::new(SeaOrmCandidateRepository::new(state.db_clone()))
}

pub fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
        RepositoryError::Unauthorized(_) => StatusCode::FORBIDDEN,
        RepositoryError::Conflict(_) => StatusCode::CONFLICT,
        RepositoryError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Error envelope for a failed repository call.
pub fn repository_error(err: RepositoryError) -> Response {
    let status = repository_status(&err);
    let message = match err {
        RepositoryError::NotFound(m)
        | RepositoryError::Unauthorized(m)
        | RepositoryError::Conflict(m) => m,
        RepositoryError::Unavailable(m) => {
            error!(error = %m, "Repository unavailable");
            "Matching backend is unavailable".to_string()
        }
    };
    ApiResponse::failure(status, message)
}

/// Error envelope for a failed entity helper call.
///
/// Unique constraint violations are conflicts with an existing row.
pub fn db_error(err: DbErr) -> Response {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        warn!(error = %detail, "Unique constraint violated");
        return ApiResponse::failure(StatusCode::CONFLICT, "A record with these values already exists");
    }
    match err {
        DbErr::RecordNotFound(m) => ApiResponse::failure(StatusCode::NOT_FOUND, m),
        DbErr::Custom(m) => ApiResponse::failure(StatusCode::BAD_REQUEST, m),
        other => {
            error!(error = %other, "Database error");
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
