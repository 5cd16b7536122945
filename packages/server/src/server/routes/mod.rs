// HTTP routes
pub mod courses;
pub mod enrollments;
pub mod health;

pub use courses::*;
pub use enrollments::*;
pub use health::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde_json::json;

use crate::domains::auth::Identity;
use crate::domains::courses::error::CourseError;

/// HTTP boundary wrapper around CourseError.
///
/// Every error reaches the client as `{error: {kind, message}}` with its
/// classified kind preserved.
pub struct ApiError(pub CourseError);

impl From<CourseError> for ApiError {
    fn from(error: CourseError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CourseError::Auth => StatusCode::UNAUTHORIZED,
            CourseError::QuotaExceeded => StatusCode::FORBIDDEN,
            CourseError::Upstream(_) => StatusCode::BAD_GATEWAY,
            CourseError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            CourseError::NotFound(_) => StatusCode::NOT_FOUND,
            CourseError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourseError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = json!({
            "error": {
                "kind": self.0.kind(),
                "message": self.0.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Resolve the authenticated identity or fail with 401.
pub(crate) fn require_identity(
    identity: Option<Extension<Identity>>,
) -> Result<Identity, ApiError> {
    identity
        .map(|Extension(identity)| identity)
        .ok_or(ApiError(CourseError::Auth))
}
