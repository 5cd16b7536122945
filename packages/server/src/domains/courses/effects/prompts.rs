//! Prompt templates and their paired response shapes.
//!
//! Each prompt promises a strict JSON schema; the struct that parses the
//! response lives next to the template so the two evolve together.

use serde::{Deserialize, Serialize};

use crate::domains::courses::data::CourseRequest;
use crate::domains::courses::models::outline::{Chapter, CourseOutline};

/// Bump when a template or its paired response shape changes.
pub const PROMPT_VERSION: &str = "v1";

/// Fallback banner artwork prompt when the outline carries none.
pub const FALLBACK_BANNER_PROMPT: &str = "Modern educational illustration";

const LAYOUT_PROMPT: &str = r#"Generate a learning course based on the following details.
Return STRICT JSON only using this schema:
{
  "course": {
    "name": "string",
    "description": "string",
    "category": "string",
    "level": "string",
    "includeVideo": true|false,
    "noOfChapters": number,
    "bannerImagePrompt": "string",
    "chapters": [
      {
        "chapterName": "string",
        "duration": "string",
        "topics": ["string"]
      }
    ]
  }
}
User Input:
"#;

const CHAPTER_PROMPT: &str = r#"Depends on Chapter name and Topic Generate content for each topic in HTML and give response in JSON format.
Schema:{
chapterName: string,
topics: [
  {
    topic: string,
    content: string
  }
]
}
User Input:
"#;

/// Expected response for the layout prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutResponse {
    pub course: CourseOutline,
}

/// Expected response for the chapter prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterBody {
    pub chapter_name: String,
    pub topics: Vec<TopicBody>,
}

/// Generated content for one topic of a chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicBody {
    pub topic: String,
    pub content: String,
}

/// Deterministic layout prompt embedding the request fields.
pub fn layout_prompt(request: &CourseRequest) -> String {
    format!(
        "{}{}",
        LAYOUT_PROMPT,
        serde_json::to_string(request).unwrap_or_default()
    )
}

/// Deterministic per-chapter prompt scoped to one chapter's name and topics.
pub fn chapter_prompt(chapter: &Chapter) -> String {
    format!(
        "{}{}",
        CHAPTER_PROMPT,
        serde_json::to_string(chapter).unwrap_or_default()
    )
}
