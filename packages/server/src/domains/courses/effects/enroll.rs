//! Enrollment - link a user to an existing course.

use tracing::info;
use uuid::Uuid;

use crate::domains::auth::Identity;
use crate::domains::courses::error::CourseError;
use crate::domains::courses::models::course::Course;
use crate::domains::courses::models::enrollment::Enrollment;
use crate::kernel::ServerDeps;

/// Outcome of an enrollment attempt.
#[derive(Debug)]
pub enum EnrollmentOutcome {
    Enrolled(Enrollment),
    AlreadyEnrolled,
}

/// Enroll the identity in the given course. Enrolling twice is a no-op.
pub async fn enroll(
    deps: &ServerDeps,
    identity: &Identity,
    course_id: Uuid,
) -> Result<EnrollmentOutcome, CourseError> {
    let course = deps
        .store
        .find_by_cid(course_id)
        .await
        .map_err(CourseError::Persistence)?;
    if course.is_none() {
        return Err(CourseError::NotFound(course_id));
    }

    let enrollment = deps
        .store
        .insert_enrollment(course_id, &identity.email)
        .await
        .map_err(CourseError::Persistence)?;

    match enrollment {
        Some(enrollment) => {
            info!(cid = %course_id, email = %identity.email, "User enrolled in course");
            Ok(EnrollmentOutcome::Enrolled(enrollment))
        }
        None => Ok(EnrollmentOutcome::AlreadyEnrolled),
    }
}

/// Courses the identity is enrolled in, newest enrollment first.
pub async fn enrolled_courses(
    deps: &ServerDeps,
    identity: &Identity,
) -> Result<Vec<Course>, CourseError> {
    deps.store
        .list_enrolled(&identity.email)
        .await
        .map_err(CourseError::Persistence)
}
