use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domains::auth::Identity;
use crate::domains::courses::effects::{enroll, enrolled_courses, EnrollmentOutcome};
use crate::domains::courses::models::course::Course;
use crate::server::app::AppState;

use super::{require_identity, ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: Uuid,
}

/// POST /api/enrollments - enroll the caller in a course
pub async fn enroll_handler(
    Extension(state): Extension<AppState>,
    identity: Option<Extension<Identity>>,
    Json(request): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let identity = require_identity(identity)?;
    let outcome = enroll(&state.deps, &identity, request.course_id).await?;

    match outcome {
        EnrollmentOutcome::Enrolled(enrollment) => Ok((
            StatusCode::CREATED,
            Json(json!({ "enrollment": enrollment })),
        )),
        EnrollmentOutcome::AlreadyEnrolled => Ok((
            StatusCode::OK,
            Json(json!({ "resp": "already_enrolled" })),
        )),
    }
}

/// GET /api/enrollments - courses the caller is enrolled in
pub async fn list_enrollments_handler(
    Extension(state): Extension<AppState>,
    identity: Option<Extension<Identity>>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let identity = require_identity(identity)?;
    let courses = enrolled_courses(&state.deps, &identity).await?;
    Ok(Json(courses))
}
