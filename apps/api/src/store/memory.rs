//! In-memory `ResumeStore` for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::ResumeStore;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    resumes: RwLock<HashMap<Uuid, Resume>>,
    writes: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions a user the way the identity provider's onboarding would.
    pub async fn insert_user(&self, external_auth_id: &str, industry: Option<&str>) -> User {
        let user = User {
            id: Uuid::new_v4(),
            external_auth_id: external_auth_id.to_string(),
            email: format!("{external_auth_id}@example.com"),
            industry: industry.map(str::to_string),
            created_at: Utc::now(),
        };
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn resume_count(&self) -> usize {
        self.resumes.read().await.len()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes `ping` fail like an unreachable database.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn find_user_by_external_id(
        &self,
        external_auth_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.external_auth_id == external_auth_id)
            .cloned())
    }

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<Resume, sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let mut resumes = self.resumes.write().await;
        let resume = resumes
            .entry(user_id)
            .and_modify(|r| {
                r.content = content.to_string();
                r.updated_at = now;
            })
            .or_insert_with(|| Resume {
                id: Uuid::new_v4(),
                user_id,
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(resume.clone())
    }

    async fn find_resume_by_user(&self, user_id: Uuid) -> Result<Option<Resume>, sqlx::Error> {
        Ok(self.resumes.read().await.get(&user_id).cloned())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}
