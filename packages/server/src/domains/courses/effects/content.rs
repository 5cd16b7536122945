//! Content expansion - fan out one generation task pair per chapter and
//! join the results in outline order.
//!
//! A malformed or failed text generation for any single chapter aborts the
//! whole expansion; a chapter's video lookup failure only empties that
//! chapter's video list. This asymmetry is deliberate: partial text content
//! would silently change "regenerate the course" into "course with holes".

use futures::future::try_join_all;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::courses::data::ExpandedCourse;
use crate::domains::courses::error::CourseError;
use crate::domains::courses::models::outline::{Chapter, ChapterContent, TopicContent, VideoRef};
use crate::kernel::{BaseVideoSearch, ServerDeps, MAX_VIDEO_RESULTS};

use super::extract_typed;
use super::prompts::{chapter_prompt, ChapterBody};

/// Expand an existing outline into full per-chapter content and persist it.
///
/// The final update is a full replace of the content field; concurrent
/// expansions of the same cid are not guarded and the last write wins.
pub async fn expand_course_content(
    deps: &ServerDeps,
    course_id: Uuid,
) -> Result<ExpandedCourse, CourseError> {
    let course = deps
        .store
        .find_by_cid(course_id)
        .await
        .map_err(CourseError::Persistence)?
        .ok_or(CourseError::NotFound(course_id))?;

    let outline = course.outline().clone();

    // Fan out one task pair per chapter. try_join_all returns results in
    // input order, so element i of the content always corresponds to
    // chapter i of the outline regardless of completion order.
    let chapter_tasks = outline
        .chapters
        .iter()
        .map(|chapter| expand_chapter(deps, chapter));
    let course_content: Vec<ChapterContent> = try_join_all(chapter_tasks).await?;

    deps.store
        .update_course_content(course_id, &course_content)
        .await
        .map_err(CourseError::Persistence)?;

    info!(
        cid = %course_id,
        chapters = course_content.len(),
        "Course content expanded"
    );

    Ok(ExpandedCourse {
        course_name: outline.name,
        course_content,
    })
}

/// Expand a single chapter: generate its topic content and look up videos
/// concurrently.
async fn expand_chapter(
    deps: &ServerDeps,
    chapter: &Chapter,
) -> Result<ChapterContent, CourseError> {
    let prompt = chapter_prompt(chapter);

    let text_task = deps.generative.generate(&prompt);
    let video_task = videos_best_effort(deps.video.as_ref(), &chapter.chapter_name);
    let (raw, video_results) = tokio::join!(text_task, video_task);

    let raw = raw.map_err(CourseError::Upstream)?;
    let body: ChapterBody = extract_typed(&raw).map_err(|e| {
        CourseError::MalformedResponse(format!(
            "chapter '{}': {}",
            chapter.chapter_name, e
        ))
    })?;

    let topic_content = body
        .topics
        .into_iter()
        .map(|topic| TopicContent {
            topic: topic.topic,
            html_body: topic.content,
        })
        .collect();

    Ok(ChapterContent {
        video_results,
        topic_content,
    })
}

/// Video lookup never fails the chapter: any error degrades to an empty
/// list with a diagnostic.
async fn videos_best_effort(video: &dyn BaseVideoSearch, query: &str) -> Vec<VideoRef> {
    match video.search(query, MAX_VIDEO_RESULTS).await {
        Ok(results) => results,
        Err(e) => {
            warn!(error = %e, query = query, "Video search failed; continuing without videos");
            vec![]
        }
    }
}
