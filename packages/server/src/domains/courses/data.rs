//! Request and response DTOs for the course API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::outline::ChapterContent;

/// User-supplied course request form. Transient; not persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub include_video: bool,
    pub no_of_chapters: u32,
    /// Caller-supplied course id; a fresh one is generated when absent.
    #[serde(default, skip_serializing)]
    pub course_id: Option<Uuid>,
}

/// Result of layout synthesis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCourse {
    pub course_id: Uuid,
    pub banner_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Result of content expansion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedCourse {
    pub course_name: String,
    pub course_content: Vec<ChapterContent>,
}
