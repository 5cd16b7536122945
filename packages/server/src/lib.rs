// CourseForge - API Core
//
// This crate provides the backend API for AI-assisted course generation:
// outline synthesis from a learner's request, quota-gated creation, and
// concurrent per-chapter content expansion.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
