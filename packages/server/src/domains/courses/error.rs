//! Typed errors for the course pipeline.
//!
//! Uses `thiserror` so every failure reaches the HTTP boundary with its
//! classified kind preserved; nothing is downgraded to a generic error.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in the course synthesis and expansion pipeline.
#[derive(Debug, Error)]
pub enum CourseError {
    /// Identity missing or lacks a usable email address
    #[error("authentication required")]
    Auth,

    /// Tier limit reached; the user must upgrade to create more courses
    #[error("course limit reached for the current plan")]
    QuotaExceeded,

    /// Primary generative call failed at the transport/service level
    #[error("generative service call failed")]
    Upstream(#[source] anyhow::Error),

    /// Service was reachable but its response could not be turned into the
    /// expected structure
    #[error("could not extract valid JSON from model response: {0}")]
    MalformedResponse(String),

    /// Expansion requested for an unknown course id
    #[error("course not found: {0}")]
    NotFound(Uuid),

    /// Underlying storage failure
    #[error("storage operation failed")]
    Persistence(#[source] anyhow::Error),

    /// Request body failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl CourseError {
    /// Machine-readable error kind for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            CourseError::Auth => "unauthorized",
            CourseError::QuotaExceeded => "quota_exceeded",
            CourseError::Upstream(_) => "upstream_failed",
            CourseError::MalformedResponse(_) => "malformed_response",
            CourseError::NotFound(_) => "not_found",
            CourseError::Persistence(_) => "storage_failed",
            CourseError::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Result type alias for course pipeline operations.
pub type Result<T> = std::result::Result<T, CourseError>;
