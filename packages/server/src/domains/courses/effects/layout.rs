//! Layout synthesis - turn a learner's request into a persisted course
//! outline.
//!
//! One external write (the insert); every fatal failure aborts before it.
//! Banner artwork is best-effort and never blocks creation.

use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::auth::Identity;
use crate::domains::courses::data::{CourseRequest, CreatedCourse};
use crate::domains::courses::error::CourseError;
use crate::domains::courses::models::course::Course;
use crate::kernel::ServerDeps;

use super::prompts::{layout_prompt, LayoutResponse, FALLBACK_BANNER_PROMPT};
use super::{extract_typed, may_create};

/// Synthesize a course outline and persist it as a new course record.
///
/// The quota check and the insert are separate operations; two concurrent
/// requests from the same identity can both pass the check (best-effort
/// quota enforcement).
pub async fn synthesize_layout(
    deps: &ServerDeps,
    identity: &Identity,
    request: CourseRequest,
) -> Result<CreatedCourse, CourseError> {
    // 1) Identity must carry a usable address
    if identity.email.trim().is_empty() {
        return Err(CourseError::Auth);
    }

    if request.no_of_chapters == 0 {
        return Err(CourseError::InvalidRequest(
            "noOfChapters must be at least 1".to_string(),
        ));
    }

    // 2) Quota gate
    if identity.tier.course_limit().is_some() {
        let existing = deps
            .store
            .count_by_owner(&identity.email)
            .await
            .map_err(CourseError::Persistence)?;
        if !may_create(identity.tier, existing) {
            info!(
                email = %identity.email,
                tier = %identity.tier,
                existing = existing,
                "Course creation denied by quota"
            );
            return Err(CourseError::QuotaExceeded);
        }
    }

    // 3) Single generative call, no retry
    let prompt = layout_prompt(&request);
    let raw = deps
        .generative
        .generate(&prompt)
        .await
        .map_err(CourseError::Upstream)?;

    // 4) Structured extraction; fatal when the outline cannot be recovered
    let layout: LayoutResponse =
        extract_typed(&raw).map_err(|e| CourseError::MalformedResponse(e.to_string()))?;
    let outline = layout.course;
    outline.validate().map_err(CourseError::MalformedResponse)?;

    // 5) Banner artwork is non-fatal: degrade to no artifact on failure
    let banner_prompt = outline
        .banner_image_prompt
        .clone()
        .unwrap_or_else(|| FALLBACK_BANNER_PROMPT.to_string());
    let banner_image_url = match deps.image.generate_image(&banner_prompt).await {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, "Banner image generation failed; continuing without artwork");
            None
        }
    };

    // 6) The single external side effect
    let cid = request.course_id.unwrap_or_else(Uuid::new_v4);
    let course = Course::new(
        cid,
        identity.email.clone(),
        outline,
        banner_image_url.clone(),
    );
    deps.store
        .insert_course(&course)
        .await
        .map_err(CourseError::Persistence)?;

    info!(
        cid = %cid,
        email = %identity.email,
        chapters = course.outline().chapters.len(),
        has_banner = banner_image_url.is_some(),
        "Course outline created"
    );

    let warning = banner_image_url
        .is_none()
        .then(|| "Banner image generation failed or returned null".to_string());

    Ok(CreatedCourse {
        course_id: cid,
        banner_image_url,
        warning,
    })
}
