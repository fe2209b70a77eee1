use tracing::info;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::resume::RESUME_PAGE_PATH;
use crate::revalidate::Revalidator;
use crate::store::ResumeStore;

/// Creates or overwrites the user's resume, then marks the resume page stale.
/// No concurrency check: the last upsert to commit wins.
pub async fn save_resume(
    store: &dyn ResumeStore,
    revalidator: &Revalidator,
    user: &User,
    content: &str,
) -> Result<Resume, AppError> {
    let resume = store.upsert_resume(user.id, content).await?;
    info!(user_id = %user.id, bytes = content.len(), "Resume saved");

    revalidator.revalidate_path(RESUME_PAGE_PATH);
    Ok(resume)
}

pub async fn get_resume(store: &dyn ResumeStore, user: &User) -> Result<Option<Resume>, AppError> {
    Ok(store.find_resume_by_user(user.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn test_save_then_get_returns_content() {
        let store = MemoryStore::new();
        let revalidator = Revalidator::new();
        let user = store.insert_user("ext_1", Some("Software")).await;

        let saved = save_resume(&store, &revalidator, &user, "# Jane Doe").await.unwrap();
        assert_eq!(saved.user_id, user.id);

        let fetched = get_resume(&store, &user).await.unwrap().unwrap();
        assert_eq!(fetched.content, "# Jane Doe");
    }

    #[tokio::test]
    async fn test_second_save_overwrites() {
        let store = MemoryStore::new();
        let revalidator = Revalidator::new();
        let user = store.insert_user("ext_1", None).await;

        let first = save_resume(&store, &revalidator, &user, "v1").await.unwrap();
        let second = save_resume(&store, &revalidator, &user, "v2").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.resume_count().await, 1);
        assert_eq!(get_resume(&store, &user).await.unwrap().unwrap().content, "v2");
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let store = MemoryStore::new();
        let revalidator = Revalidator::new();
        let alice = store.insert_user("alice", None).await;
        let bob = store.insert_user("bob", None).await;

        save_resume(&store, &revalidator, &alice, "alice resume").await.unwrap();
        assert!(get_resume(&store, &bob).await.unwrap().is_none());

        save_resume(&store, &revalidator, &bob, "bob resume").await.unwrap();
        assert_eq!(store.resume_count().await, 2);
        assert_eq!(
            get_resume(&store, &alice).await.unwrap().unwrap().content,
            "alice resume"
        );
    }

    #[tokio::test]
    async fn test_get_without_resume() {
        let store = MemoryStore::new();
        let user = store.insert_user("ext_1", None).await;
        assert!(get_resume(&store, &user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_signals_resume_page() {
        let store = MemoryStore::new();
        let revalidator = Revalidator::new();
        let mut rx = revalidator.subscribe();
        let user = store.insert_user("ext_1", None).await;

        save_resume(&store, &revalidator, &user, "content").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), RESUME_PAGE_PATH);
    }
}
