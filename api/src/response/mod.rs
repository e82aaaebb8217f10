use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;

/// JSON envelope returned by every endpoint.
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "full_name": "Alex Johnson" },
///   "message": "Profile retrieved successfully"
/// }
/// ```
///
/// Error responses carry `T::default()` as `data`, usually `null`:
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "User 7 not found"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// An error envelope with empty `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    /// Shorthand for `(status, Json(ApiResponse::<()>::error(message)))`.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
