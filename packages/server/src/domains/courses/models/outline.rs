//! Outline and content types - the structured course plan and its expansion.
//!
//! Field names serialize in camelCase to match the JSON contract of the
//! generative prompts and the HTTP API.

use serde::{Deserialize, Serialize};

/// The top-level structured course plan, before per-chapter expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutline {
    pub name: String,
    pub description: String,
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub include_video: bool,
    pub no_of_chapters: u32,
    #[serde(default)]
    pub banner_image_prompt: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// A single chapter of the outline. Chapter order is significant and
/// preserved end-to-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub chapter_name: String,
    pub duration: String,
    pub topics: Vec<String>,
}

impl CourseOutline {
    /// Structural validation: at least one chapter, and every chapter has at
    /// least one topic.
    pub fn validate(&self) -> Result<(), String> {
        if self.chapters.is_empty() {
            return Err("outline has no chapters".to_string());
        }
        for (i, chapter) in self.chapters.iter().enumerate() {
            if chapter.topics.is_empty() {
                return Err(format!(
                    "chapter {} ({}) has no topics",
                    i, chapter.chapter_name
                ));
            }
        }
        Ok(())
    }
}

/// Expanded content for one chapter, index-aligned with the outline's
/// `chapters`. An empty `video_results` is degraded, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterContent {
    pub video_results: Vec<VideoRef>,
    pub topic_content: Vec<TopicContent>,
}

/// Generated learning material for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicContent {
    pub topic: String,
    pub html_body: String,
}

/// Reference to a supplementary video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub video_id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline_with_chapters(chapters: Vec<Chapter>) -> CourseOutline {
        CourseOutline {
            name: "Rust Basics".to_string(),
            description: "Intro course".to_string(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            include_video: true,
            no_of_chapters: chapters.len() as u32,
            banner_image_prompt: None,
            chapters,
        }
    }

    #[test]
    fn test_validate_rejects_empty_chapters() {
        let outline = outline_with_chapters(vec![]);
        assert!(outline.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_chapter_without_topics() {
        let outline = outline_with_chapters(vec![Chapter {
            chapter_name: "Ownership".to_string(),
            duration: "1h".to_string(),
            topics: vec![],
        }]);
        assert!(outline.validate().is_err());
    }

    #[test]
    fn test_outline_camel_case_round_trip() {
        let json = r#"{
            "name": "Rust Basics",
            "description": "Intro",
            "category": "Programming",
            "level": "Beginner",
            "includeVideo": true,
            "noOfChapters": 1,
            "bannerImagePrompt": "ferris at a blackboard",
            "chapters": [
                {"chapterName": "Ownership", "duration": "1h", "topics": ["moves"]}
            ]
        }"#;

        let outline: CourseOutline = serde_json::from_str(json).unwrap();
        assert!(outline.validate().is_ok());
        assert_eq!(outline.chapters[0].chapter_name, "Ownership");

        let back = serde_json::to_value(&outline).unwrap();
        assert_eq!(back["noOfChapters"], 1);
        assert_eq!(back["chapters"][0]["chapterName"], "Ownership");
    }
}
