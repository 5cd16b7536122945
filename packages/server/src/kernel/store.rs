//! Postgres implementation of the CourseStore seam.
//!
//! Delegates to the model query functions; domain effects only ever see the
//! trait, which keeps them testable against the in-memory store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::CourseStore;
use crate::domains::courses::models::course::Course;
use crate::domains::courses::models::enrollment::Enrollment;
use crate::domains::courses::models::outline::ChapterContent;

#[derive(Clone)]
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn insert_course(&self, course: &Course) -> Result<()> {
        course.insert(&self.pool).await
    }

    async fn find_by_cid(&self, cid: Uuid) -> Result<Option<Course>> {
        Course::find_by_cid(cid, &self.pool).await
    }

    async fn count_by_owner(&self, owner_email: &str) -> Result<i64> {
        Course::count_by_owner(owner_email, &self.pool).await
    }

    async fn update_course_content(&self, cid: Uuid, content: &[ChapterContent]) -> Result<()> {
        Course::update_content(cid, content, &self.pool).await
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Course>> {
        Course::list_by_owner(owner_email, &self.pool).await
    }

    async fn list_published(&self) -> Result<Vec<Course>> {
        Course::list_published(&self.pool).await
    }

    async fn insert_enrollment(&self, cid: Uuid, user_email: &str) -> Result<Option<Enrollment>> {
        Enrollment::insert(cid, user_email, &self.pool).await
    }

    async fn list_enrolled(&self, user_email: &str) -> Result<Vec<Course>> {
        Enrollment::enrolled_courses(user_email, &self.pool).await
    }
}
