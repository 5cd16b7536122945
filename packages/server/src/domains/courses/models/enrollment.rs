use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::course::Course;

/// Enrollment - links a user to a course they are taking.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Enrollment {
    pub id: Uuid,
    pub cid: Uuid,
    pub user_email: String,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Insert an enrollment; returns None when the user is already enrolled.
    pub async fn insert(cid: Uuid, user_email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (id, cid, user_email, enrolled_at)
             VALUES ($1, $2, $3, NOW())
             ON CONFLICT (cid, user_email) DO NOTHING
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(cid)
        .bind(user_email)
        .fetch_optional(pool)
        .await?;
        Ok(enrollment)
    }

    /// Courses the given user is enrolled in, newest enrollment first
    pub async fn enrolled_courses(user_email: &str, pool: &PgPool) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT c.* FROM courses c
             INNER JOIN enrollments e ON e.cid = c.cid
             WHERE e.user_email = $1
             ORDER BY e.enrolled_at DESC",
        )
        .bind(user_email)
        .fetch_all(pool)
        .await?;
        Ok(courses)
    }
}
