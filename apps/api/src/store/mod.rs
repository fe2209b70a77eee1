//! Storage boundary — `users` lookup and the one-resume-per-user upsert/find pair.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses `PgResumeStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::resume::Resume;
use crate::models::user::User;

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgResumeStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Reads the internal user mapped to an identity-provider user id.
    async fn find_user_by_external_id(&self, external_auth_id: &str)
        -> Result<Option<User>, sqlx::Error>;

    /// Creates the user's resume or overwrites its content. Last write wins.
    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<Resume, sqlx::Error>;

    async fn find_resume_by_user(&self, user_id: Uuid) -> Result<Option<Resume>, sqlx::Error>;

    /// Round trip to the backing store, used by the health check.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
