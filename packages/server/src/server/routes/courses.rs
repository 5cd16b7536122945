use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::auth::Identity;
use crate::domains::courses::data::{CourseRequest, CreatedCourse, ExpandedCourse};
use crate::domains::courses::effects::{expand_course_content, synthesize_layout};
use crate::domains::courses::error::CourseError;
use crate::domains::courses::models::course::Course;
use crate::server::app::AppState;

use super::{require_identity, ApiError};

/// POST /api/courses - synthesize a course outline
pub async fn create_course_handler(
    Extension(state): Extension<AppState>,
    identity: Option<Extension<Identity>>,
    Json(request): Json<CourseRequest>,
) -> Result<(StatusCode, Json<CreatedCourse>), ApiError> {
    let identity = require_identity(identity)?;
    let created = synthesize_layout(&state.deps, &identity, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/courses/{cid}/content - expand an outline into full content
pub async fn expand_course_handler(
    Extension(state): Extension<AppState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<ExpandedCourse>, ApiError> {
    let expanded = expand_course_content(&state.deps, cid).await?;
    Ok(Json(expanded))
}

#[derive(Debug, Deserialize)]
pub struct CoursesQuery {
    #[serde(default)]
    published: bool,
}

/// GET /api/courses - the caller's courses, or every published course when
/// `?published=true`
pub async fn list_courses_handler(
    Extension(state): Extension<AppState>,
    identity: Option<Extension<Identity>>,
    Query(query): Query<CoursesQuery>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = if query.published {
        state
            .deps
            .store
            .list_published()
            .await
            .map_err(CourseError::Persistence)?
    } else {
        let identity = require_identity(identity)?;
        state
            .deps
            .store
            .list_by_owner(&identity.email)
            .await
            .map_err(CourseError::Persistence)?
    };
    Ok(Json(courses))
}

/// GET /api/courses/{cid} - a single course record
pub async fn get_course_handler(
    Extension(state): Extension<AppState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .deps
        .store
        .find_by_cid(cid)
        .await
        .map_err(CourseError::Persistence)?
        .ok_or(CourseError::NotFound(cid))?;
    Ok(Json(course))
}
