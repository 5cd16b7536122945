// Course pipeline tests - layout synthesis and content expansion against
// scripted mock dependencies.

use std::sync::Arc;

use server_core::domains::auth::{Identity, Tier};
use server_core::domains::courses::data::CourseRequest;
use server_core::domains::courses::effects::{
    enroll, enrolled_courses, expand_course_content, synthesize_layout, EnrollmentOutcome,
};
use server_core::domains::courses::effects::prompts::FALLBACK_BANNER_PROMPT;
use server_core::domains::courses::error::CourseError;
use server_core::domains::courses::models::course::Course;
use server_core::domains::courses::models::outline::{Chapter, CourseOutline};
use server_core::kernel::test_dependencies::{
    FailingImageGenerator, InMemoryCourseStore, MockGenerative, MockVideoSearch,
    StaticImageGenerator,
};
use server_core::kernel::ServerDeps;
use uuid::Uuid;

// =============================================================================
// Fixtures
// =============================================================================

fn identity(tier: Tier) -> Identity {
    Identity {
        user_id: "user-1".to_string(),
        email: "learner@example.com".to_string(),
        tier,
    }
}

fn request(chapters: u32) -> CourseRequest {
    CourseRequest {
        name: "Rust Basics".to_string(),
        description: "An introduction to Rust".to_string(),
        category: "Programming".to_string(),
        level: "Beginner".to_string(),
        include_video: true,
        no_of_chapters: chapters,
        course_id: None,
    }
}

/// Valid layout response JSON with the given chapter names, in order.
fn layout_json(chapter_names: &[&str]) -> String {
    let chapters: Vec<serde_json::Value> = chapter_names
        .iter()
        .map(|name| {
            serde_json::json!({
                "chapterName": name,
                "duration": "1h",
                "topics": [format!("{} fundamentals", name)]
            })
        })
        .collect();

    serde_json::json!({
        "course": {
            "name": "Rust Basics",
            "description": "An introduction to Rust",
            "category": "Programming",
            "level": "Beginner",
            "includeVideo": true,
            "noOfChapters": chapter_names.len(),
            "bannerImagePrompt": "ferris at a blackboard",
            "chapters": chapters
        }
    })
    .to_string()
}

/// Valid per-chapter content response JSON.
fn chapter_body_json(chapter_name: &str, topic: &str) -> String {
    serde_json::json!({
        "chapterName": chapter_name,
        "topics": [
            {"topic": topic, "content": format!("<h1>{}</h1>", topic)}
        ]
    })
    .to_string()
}

fn deps(
    store: Arc<InMemoryCourseStore>,
    generative: MockGenerative,
    image: StaticImageGenerator,
    video: MockVideoSearch,
) -> ServerDeps {
    ServerDeps::new(store, Arc::new(generative), Arc::new(image), Arc::new(video))
}

/// Seed a stored course with the given chapters; returns its cid.
async fn seed_course(store: &InMemoryCourseStore, chapter_names: &[&str]) -> Uuid {
    let outline = CourseOutline {
        name: "Rust Basics".to_string(),
        description: "An introduction to Rust".to_string(),
        category: "Programming".to_string(),
        level: "Beginner".to_string(),
        include_video: true,
        no_of_chapters: chapter_names.len() as u32,
        banner_image_prompt: None,
        chapters: chapter_names
            .iter()
            .map(|name| Chapter {
                chapter_name: name.to_string(),
                duration: "1h".to_string(),
                topics: vec![format!("{} fundamentals", name)],
            })
            .collect(),
    };
    let course = Course::new(
        Uuid::new_v4(),
        "learner@example.com".to_string(),
        outline,
        None,
    );
    use server_core::kernel::CourseStore;
    store.insert_course(&course).await.unwrap();
    course.cid
}

// =============================================================================
// Layout synthesis
// =============================================================================

#[tokio::test]
async fn create_course_returns_chapters_in_emitted_order() {
    let store = Arc::new(InMemoryCourseStore::new());
    let generative = MockGenerative::new().with_response(&layout_json(&["Ownership", "Traits"]));
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(Some("https://cdn.example.com/banner.png")),
        MockVideoSearch::new(),
    );

    let created = synthesize_layout(&deps, &identity(Tier::Starter), request(2))
        .await
        .unwrap();

    assert_eq!(
        created.banner_image_url.as_deref(),
        Some("https://cdn.example.com/banner.png")
    );
    assert!(created.warning.is_none());

    let stored = store.get(created.course_id).unwrap();
    let chapters: Vec<&str> = stored
        .outline()
        .chapters
        .iter()
        .map(|c| c.chapter_name.as_str())
        .collect();
    assert_eq!(chapters, vec!["Ownership", "Traits"]);
    assert!(stored.course_content.is_none());
}

#[tokio::test]
async fn malformed_layout_response_aborts_without_persisting() {
    let store = Arc::new(InMemoryCourseStore::new());
    let generative = MockGenerative::new().with_response("I cannot produce a course right now.");
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(Some("https://cdn.example.com/banner.png")),
        MockVideoSearch::new(),
    );

    let result = synthesize_layout(&deps, &identity(Tier::Starter), request(2)).await;

    assert!(matches!(result, Err(CourseError::MalformedResponse(_))));
    assert_eq!(store.course_count(), 0);
}

#[tokio::test]
async fn fenced_layout_response_parses_like_unfenced() {
    let store = Arc::new(InMemoryCourseStore::new());
    let fenced = format!("```json\n{}\n```", layout_json(&["Ownership"]));
    let generative = MockGenerative::new().with_response(&fenced);
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let created = synthesize_layout(&deps, &identity(Tier::Starter), request(1))
        .await
        .unwrap();
    let stored = store.get(created.course_id).unwrap();
    assert_eq!(stored.outline().chapters.len(), 1);
}

#[tokio::test]
async fn upstream_failure_is_classified_and_nothing_persists() {
    let store = Arc::new(InMemoryCourseStore::new());
    let generative = MockGenerative::new().with_failure("connection reset");
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let result = synthesize_layout(&deps, &identity(Tier::Starter), request(2)).await;

    assert!(matches!(result, Err(CourseError::Upstream(_))));
    assert_eq!(store.course_count(), 0);
}

#[tokio::test]
async fn banner_failure_never_prevents_creation() {
    let store = Arc::new(InMemoryCourseStore::new());
    let generative = MockGenerative::new().with_response(&layout_json(&["Ownership"]));
    let deps = ServerDeps::new(
        store.clone(),
        Arc::new(generative),
        Arc::new(FailingImageGenerator),
        Arc::new(MockVideoSearch::new()),
    );

    let created = synthesize_layout(&deps, &identity(Tier::Starter), request(1))
        .await
        .unwrap();

    assert!(created.banner_image_url.is_none());
    assert!(created.warning.is_some());
    assert!(store.get(created.course_id).is_some());
}

#[tokio::test]
async fn banner_prompt_falls_back_when_outline_has_none() {
    let store = Arc::new(InMemoryCourseStore::new());
    // Layout without a bannerImagePrompt field
    let layout = serde_json::json!({
        "course": {
            "name": "Rust Basics",
            "description": "Intro",
            "category": "Programming",
            "level": "Beginner",
            "includeVideo": false,
            "noOfChapters": 1,
            "chapters": [
                {"chapterName": "Ownership", "duration": "1h", "topics": ["moves"]}
            ]
        }
    })
    .to_string();
    let generative = MockGenerative::new().with_response(&layout);
    let image = Arc::new(StaticImageGenerator::new(Some(
        "https://cdn.example.com/banner.png",
    )));
    let deps = ServerDeps::new(
        store,
        Arc::new(generative),
        image.clone(),
        Arc::new(MockVideoSearch::new()),
    );

    synthesize_layout(&deps, &identity(Tier::Starter), request(1))
        .await
        .unwrap();

    assert_eq!(image.prompts(), vec![FALLBACK_BANNER_PROMPT.to_string()]);
}

// =============================================================================
// Quota policy
// =============================================================================

#[tokio::test]
async fn free_tier_second_course_is_denied() {
    let store = Arc::new(InMemoryCourseStore::new());
    seed_course(&store, &["Ownership"]).await;

    let generative = MockGenerative::new().with_response(&layout_json(&["Traits"]));
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let result = synthesize_layout(&deps, &identity(Tier::Free), request(1)).await;

    assert!(matches!(result, Err(CourseError::QuotaExceeded)));
    assert_eq!(store.course_count(), 1);
}

#[tokio::test]
async fn unlimited_tier_is_allowed_regardless_of_count() {
    let store = Arc::new(InMemoryCourseStore::new());
    for _ in 0..5 {
        seed_course(&store, &["Ownership"]).await;
    }

    let generative = MockGenerative::new().with_response(&layout_json(&["Traits"]));
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let created = synthesize_layout(&deps, &identity(Tier::Starter), request(1)).await;

    assert!(created.is_ok());
    assert_eq!(store.course_count(), 6);
}

// =============================================================================
// Content expansion
// =============================================================================

#[tokio::test]
async fn expansion_preserves_chapter_order_and_length() {
    let store = Arc::new(InMemoryCourseStore::new());
    let cid = seed_course(&store, &["Ownership", "Traits", "Async"]).await;

    // Delay the first chapter so completion order differs from outline order
    let generative = MockGenerative::new()
        .with_keyed_response("Ownership", &chapter_body_json("Ownership", "t0"))
        .with_keyed_response("Traits", &chapter_body_json("Traits", "t1"))
        .with_keyed_response("Async", &chapter_body_json("Async", "t2"))
        .with_keyed_delay("Ownership", 50);
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let expanded = expand_course_content(&deps, cid).await.unwrap();

    assert_eq!(expanded.course_name, "Rust Basics");
    assert_eq!(expanded.course_content.len(), 3);
    let topics: Vec<&str> = expanded
        .course_content
        .iter()
        .map(|c| c.topic_content[0].topic.as_str())
        .collect();
    assert_eq!(topics, vec!["t0", "t1", "t2"]);

    // Persisted content matches the returned content
    let stored = store.get(cid).unwrap();
    assert_eq!(stored.course_content.unwrap().0.len(), 3);
}

#[tokio::test]
async fn video_failure_degrades_only_that_chapter() {
    let store = Arc::new(InMemoryCourseStore::new());
    let cid = seed_course(&store, &["Ownership", "Traits", "Async"]).await;

    let generative = MockGenerative::new()
        .with_keyed_response("Ownership", &chapter_body_json("Ownership", "t0"))
        .with_keyed_response("Traits", &chapter_body_json("Traits", "t1"))
        .with_keyed_response("Async", &chapter_body_json("Async", "t2"));
    let video = MockVideoSearch::new().failing_for("Traits");
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        video,
    );

    let expanded = expand_course_content(&deps, cid).await.unwrap();

    assert_eq!(expanded.course_content.len(), 3);
    assert!(!expanded.course_content[0].video_results.is_empty());
    assert!(expanded.course_content[1].video_results.is_empty());
    assert!(!expanded.course_content[2].video_results.is_empty());
    // Text content survives the degraded chapter
    assert_eq!(expanded.course_content[1].topic_content[0].topic, "t1");
}

#[tokio::test]
async fn one_malformed_chapter_aborts_whole_expansion() {
    let store = Arc::new(InMemoryCourseStore::new());
    let cid = seed_course(&store, &["Ownership", "Traits", "Async"]).await;

    let generative = MockGenerative::new()
        .with_keyed_response("Ownership", &chapter_body_json("Ownership", "t0"))
        .with_keyed_response("Traits", "not json at all")
        .with_keyed_response("Async", &chapter_body_json("Async", "t2"));
    let deps = deps(
        store.clone(),
        generative,
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let result = expand_course_content(&deps, cid).await;

    assert!(matches!(result, Err(CourseError::MalformedResponse(_))));
    // Nothing was persisted for the aborted expansion
    assert!(store.get(cid).unwrap().course_content.is_none());
}

#[tokio::test]
async fn expansion_of_unknown_course_is_not_found() {
    let store = Arc::new(InMemoryCourseStore::new());
    let deps = deps(
        store,
        MockGenerative::new(),
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let missing = Uuid::new_v4();
    let result = expand_course_content(&deps, missing).await;

    assert!(matches!(result, Err(CourseError::NotFound(cid)) if cid == missing));
}

// =============================================================================
// Enrollment
// =============================================================================

#[tokio::test]
async fn enroll_is_idempotent_and_listable() {
    let store = Arc::new(InMemoryCourseStore::new());
    let cid = seed_course(&store, &["Ownership"]).await;
    let deps = deps(
        store,
        MockGenerative::new(),
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );
    let identity = identity(Tier::Free);

    let first = enroll(&deps, &identity, cid).await.unwrap();
    assert!(matches!(first, EnrollmentOutcome::Enrolled(_)));

    let second = enroll(&deps, &identity, cid).await.unwrap();
    assert!(matches!(second, EnrollmentOutcome::AlreadyEnrolled));

    let courses = enrolled_courses(&deps, &identity).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].cid, cid);
}

#[tokio::test]
async fn enroll_in_unknown_course_is_not_found() {
    let store = Arc::new(InMemoryCourseStore::new());
    let deps = deps(
        store,
        MockGenerative::new(),
        StaticImageGenerator::new(None),
        MockVideoSearch::new(),
    );

    let result = enroll(&deps, &identity(Tier::Free), Uuid::new_v4()).await;
    assert!(matches!(result, Err(CourseError::NotFound(_))));
}
