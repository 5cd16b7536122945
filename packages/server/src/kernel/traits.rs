// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Every external
// collaborator (generative text, image generation, video search, persistence)
// is an explicitly constructed, passed-in handle so tests can substitute
// doubles and no client lives in process-global state.
//
// Naming convention: Base* for trait names (e.g., BaseGenerative)

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::courses::models::course::Course;
use crate::domains::courses::models::enrollment::Enrollment;
use crate::domains::courses::models::outline::{ChapterContent, VideoRef};

// =============================================================================
// Generative Text Trait (Infrastructure - single-attempt LLM completion)
// =============================================================================

#[async_trait]
pub trait BaseGenerative: Send + Sync {
    /// Complete a prompt with the generative model (returns raw text).
    /// One attempt; no retry contract is assumed by callers.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Image Generation Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseImageGenerator: Send + Sync {
    /// Generate an image for the prompt; returns an artifact URL when the
    /// provider produced one. Calls are bounded by the client's timeout.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>>;
}

// =============================================================================
// Video Search Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseVideoSearch: Send + Sync {
    /// Search for videos matching the query, up to `max_results`.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoRef>>;
}

// =============================================================================
// Course Store Trait (Infrastructure - persistence seam)
// =============================================================================

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn insert_course(&self, course: &Course) -> Result<()>;

    async fn find_by_cid(&self, cid: Uuid) -> Result<Option<Course>>;

    async fn count_by_owner(&self, owner_email: &str) -> Result<i64>;

    /// Full replace of an existing record's content field.
    async fn update_course_content(&self, cid: Uuid, content: &[ChapterContent]) -> Result<()>;

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Course>>;

    /// Courses whose content has been expanded.
    async fn list_published(&self) -> Result<Vec<Course>>;

    /// Returns None when the user is already enrolled.
    async fn insert_enrollment(&self, cid: Uuid, user_email: &str) -> Result<Option<Enrollment>>;

    async fn list_enrolled(&self, user_email: &str) -> Result<Vec<Course>>;
}
