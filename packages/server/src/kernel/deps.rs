//! Server dependencies for effects (using traits for testability)
//!
//! Central dependency container used by all domain effects. External services
//! are trait objects so tests can inject doubles; nothing here is global.

use std::sync::Arc;

use super::{BaseGenerative, BaseImageGenerator, BaseVideoSearch, CourseStore};

/// Server dependencies accessible to effects
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn CourseStore>,
    /// Generative text client for outline and chapter content
    pub generative: Arc<dyn BaseGenerative>,
    /// Banner artwork generation; failures never abort a pipeline
    pub image: Arc<dyn BaseImageGenerator>,
    /// Per-chapter video lookup; failures degrade to empty results
    pub video: Arc<dyn BaseVideoSearch>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn CourseStore>,
        generative: Arc<dyn BaseGenerative>,
        image: Arc<dyn BaseImageGenerator>,
        video: Arc<dyn BaseVideoSearch>,
    ) -> Self {
        Self {
            store,
            generative,
            image,
            video,
        }
    }
}
