use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::ResumeStore;

/// `ResumeStore` backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn find_user_by_external_id(
        &self,
        external_auth_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_auth_id = $1")
            .bind(external_auth_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<Resume, sqlx::Error> {
        // Single statement so concurrent first saves cannot create two rows.
        sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (user_id, content)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET content = EXCLUDED.content, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_resume_by_user(&self, user_id: Uuid) -> Result<Option<Resume>, sqlx::Error> {
        sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
