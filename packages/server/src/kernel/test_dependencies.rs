// Mock implementations for testing
//
// Scripted doubles that can be injected into ServerDeps. Follows the
// builder-style `with_*` convention; calls are recorded for assertions.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseGenerative, BaseImageGenerator, BaseVideoSearch, CourseStore};
use crate::domains::courses::models::course::Course;
use crate::domains::courses::models::enrollment::Enrollment;
use crate::domains::courses::models::outline::{ChapterContent, VideoRef};

// =============================================================================
// Mock Generative Text
// =============================================================================

enum Scripted {
    Text(String),
    Failure(String),
}

/// Scripted generative client.
///
/// Responses can be queued FIFO or keyed by a prompt substring; keyed entries
/// win so concurrent fan-out tests can map responses to the right chapter.
pub struct MockGenerative {
    queue: Arc<Mutex<Vec<Scripted>>>,
    keyed: Arc<Mutex<Vec<(String, Scripted)>>>,
    delays_ms: Arc<Mutex<HashMap<String, u64>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerative {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(Vec::new())),
            keyed: Arc::new(Mutex::new(Vec::new())),
            delays_ms: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response returned for the next unmatched prompt.
    pub fn with_response(self, response: &str) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push(Scripted::Text(response.to_string()));
        self
    }

    /// Queue a failure for the next unmatched prompt.
    pub fn with_failure(self, message: &str) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push(Scripted::Failure(message.to_string()));
        self
    }

    /// Respond with `response` whenever the prompt contains `key`.
    pub fn with_keyed_response(self, key: &str, response: &str) -> Self {
        self.keyed
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Text(response.to_string())));
        self
    }

    /// Fail whenever the prompt contains `key`.
    pub fn with_keyed_failure(self, key: &str, message: &str) -> Self {
        self.keyed
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Failure(message.to_string())));
        self
    }

    /// Delay the response by `ms` whenever the prompt contains `key`;
    /// lets tests shuffle completion order under concurrent fan-out.
    pub fn with_keyed_delay(self, key: &str, ms: u64) -> Self {
        self.delays_ms.lock().unwrap().insert(key.to_string(), ms);
        self
    }

    /// All prompts this mock has seen.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGenerative {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGenerative for MockGenerative {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let delay = {
            let delays = self.delays_ms.lock().unwrap();
            delays
                .iter()
                .find(|(key, _)| prompt.contains(key.as_str()))
                .map(|(_, ms)| *ms)
        };
        if let Some(ms) = delay {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }

        let scripted = {
            let keyed = self.keyed.lock().unwrap();
            keyed
                .iter()
                .find(|(key, _)| prompt.contains(key.as_str()))
                .map(|(_, scripted)| match scripted {
                    Scripted::Text(text) => Scripted::Text(text.clone()),
                    Scripted::Failure(message) => Scripted::Failure(message.clone()),
                })
        };

        let scripted = match scripted {
            Some(scripted) => scripted,
            None => {
                let mut queue = self.queue.lock().unwrap();
                if queue.is_empty() {
                    anyhow::bail!("MockGenerative: no scripted response for prompt");
                }
                queue.remove(0)
            }
        };

        match scripted {
            Scripted::Text(text) => Ok(text),
            Scripted::Failure(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

// =============================================================================
// Mock Image Generator
// =============================================================================

/// Image generator that always returns the same artifact.
pub struct StaticImageGenerator {
    url: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StaticImageGenerator {
    pub fn new(url: Option<&str>) -> Self {
        Self {
            url: url.map(|u| u.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseImageGenerator for StaticImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.url.clone())
    }
}

/// Image generator that always fails (simulated provider outage).
pub struct FailingImageGenerator;

#[async_trait]
impl BaseImageGenerator for FailingImageGenerator {
    async fn generate_image(&self, _prompt: &str) -> Result<Option<String>> {
        anyhow::bail!("image provider unavailable")
    }
}

// =============================================================================
// Mock Video Search
// =============================================================================

/// Scripted video search; fails for queries containing a registered key,
/// otherwise returns the default results capped at `max_results`.
pub struct MockVideoSearch {
    default_results: Arc<Mutex<Vec<VideoRef>>>,
    failing_keys: Arc<Mutex<Vec<String>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockVideoSearch {
    pub fn new() -> Self {
        Self {
            default_results: Arc::new(Mutex::new(vec![
                VideoRef {
                    video_id: "vid-1".to_string(),
                    title: "Mock video 1".to_string(),
                },
                VideoRef {
                    video_id: "vid-2".to_string(),
                    title: "Mock video 2".to_string(),
                },
            ])),
            failing_keys: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_results(self, results: Vec<VideoRef>) -> Self {
        *self.default_results.lock().unwrap() = results;
        self
    }

    /// Fail any search whose query contains `key`.
    pub fn failing_for(self, key: &str) -> Self {
        self.failing_keys.lock().unwrap().push(key.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockVideoSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseVideoSearch for MockVideoSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoRef>> {
        self.queries.lock().unwrap().push(query.to_string());

        let failing = self
            .failing_keys
            .lock()
            .unwrap()
            .iter()
            .any(|key| query.contains(key.as_str()));
        if failing {
            anyhow::bail!("video search unavailable for query: {}", query);
        }

        let mut results = self.default_results.lock().unwrap().clone();
        results.truncate(max_results);
        Ok(results)
    }
}

// =============================================================================
// In-Memory Course Store
// =============================================================================

/// CourseStore backed by process memory; enough persistence semantics for
/// pipeline tests without a database.
pub struct InMemoryCourseStore {
    courses: Mutex<Vec<Course>>,
    enrollments: Mutex<Vec<Enrollment>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self {
            courses: Mutex::new(Vec::new()),
            enrollments: Mutex::new(Vec::new()),
        }
    }

    /// Number of stored course records.
    pub fn course_count(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    /// Snapshot of a stored record.
    pub fn get(&self, cid: Uuid) -> Option<Course> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.cid == cid)
            .cloned()
    }
}

impl Default for InMemoryCourseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn insert_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.lock().unwrap();
        if courses.iter().any(|c| c.cid == course.cid) {
            anyhow::bail!("duplicate cid: {}", course.cid);
        }
        courses.push(course.clone());
        Ok(())
    }

    async fn find_by_cid(&self, cid: Uuid) -> Result<Option<Course>> {
        Ok(self.get(cid))
    }

    async fn count_by_owner(&self, owner_email: &str) -> Result<i64> {
        let count = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_email == owner_email)
            .count();
        Ok(count as i64)
    }

    async fn update_course_content(&self, cid: Uuid, content: &[ChapterContent]) -> Result<()> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.cid == cid)
            .ok_or_else(|| anyhow::anyhow!("no course with cid {}", cid))?;
        course.course_content = Some(sqlx::types::Json(content.to_vec()));
        course.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_email == owner_email)
            .cloned()
            .collect();
        courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(courses)
    }

    async fn list_published(&self) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.course_content.is_some())
            .cloned()
            .collect();
        courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(courses)
    }

    async fn insert_enrollment(&self, cid: Uuid, user_email: &str) -> Result<Option<Enrollment>> {
        let mut enrollments = self.enrollments.lock().unwrap();
        let already = enrollments
            .iter()
            .any(|e| e.cid == cid && e.user_email == user_email);
        if already {
            return Ok(None);
        }

        let enrollment = Enrollment {
            id: Uuid::new_v4(),
            cid,
            user_email: user_email.to_string(),
            enrolled_at: chrono::Utc::now(),
        };
        enrollments.push(enrollment.clone());
        Ok(Some(enrollment))
    }

    async fn list_enrolled(&self, user_email: &str) -> Result<Vec<Course>> {
        let enrollments = self.enrollments.lock().unwrap();
        let mut enrolled: Vec<(chrono::DateTime<chrono::Utc>, Course)> = Vec::new();
        let courses = self.courses.lock().unwrap();
        for enrollment in enrollments.iter().filter(|e| e.user_email == user_email) {
            if let Some(course) = courses.iter().find(|c| c.cid == enrollment.cid) {
                enrolled.push((enrollment.enrolled_at, course.clone()));
            }
        }
        enrolled.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(enrolled.into_iter().map(|(_, c)| c).collect())
    }
}
