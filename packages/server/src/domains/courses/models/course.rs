use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::outline::{ChapterContent, CourseOutline};

/// Course - a persisted course record.
///
/// Created by the layout synthesis phase (outline populated, content null),
/// later mutated in place by content expansion (content populated). Never
/// deleted by this core.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub cid: Uuid,
    pub owner_email: String,
    pub course_json: Json<CourseOutline>,
    pub banner_image_url: Option<String>,
    pub course_content: Option<Json<Vec<ChapterContent>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Build a fresh record for insertion (content starts out null).
    pub fn new(
        cid: Uuid,
        owner_email: String,
        outline: CourseOutline,
        banner_image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            cid,
            owner_email,
            course_json: Json(outline),
            banner_image_url,
            course_content: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The course outline.
    pub fn outline(&self) -> &CourseOutline {
        &self.course_json.0
    }

    /// Insert a new course record
    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "INSERT INTO courses
                 (cid, owner_email, course_json, banner_image_url, course_content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(self.cid)
        .bind(&self.owner_email)
        .bind(&self.course_json)
        .bind(&self.banner_image_url)
        .bind(&self.course_content)
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a course by its cid
    pub async fn find_by_cid(cid: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE cid = $1")
            .bind(cid)
            .fetch_optional(pool)
            .await?;
        Ok(course)
    }

    /// Count courses owned by the given email (quota input)
    pub async fn count_by_owner(owner_email: &str, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM courses WHERE owner_email = $1",
        )
        .bind(owner_email)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Full replace of the course content field
    pub async fn update_content(
        cid: Uuid,
        content: &[ChapterContent],
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE courses SET course_content = $2, updated_at = NOW() WHERE cid = $1",
        )
        .bind(cid)
        .bind(Json(content))
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Courses created by the given owner, newest first
    pub async fn list_by_owner(owner_email: &str, pool: &PgPool) -> Result<Vec<Self>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses
             WHERE owner_email = $1
             ORDER BY created_at DESC",
        )
        .bind(owner_email)
        .fetch_all(pool)
        .await?;
        Ok(courses)
    }

    /// Courses whose content has been expanded (explorable by any user)
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Self>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses
             WHERE course_content IS NOT NULL
             ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(courses)
    }
}
