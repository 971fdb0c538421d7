use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::repo::{RepoResult, UserRepository};
use crate::users::repo_types::{User, UserId};

/// In-process `UserRepository`. Keeps insertion order and does not enforce
/// email uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        let stored = match user.id {
            Some(id) => {
                let stored = user.clone();
                match users.iter_mut().find(|u| u.id == Some(id)) {
                    Some(existing) => *existing = stored.clone(),
                    None => users.push(stored.clone()),
                }
                stored
            }
            None => {
                let stored = user.clone().with_id(Uuid::new_v4());
                users.push(stored.clone());
                stored
            }
        };
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn delete_by_id(&self, id: UserId) -> RepoResult<()> {
        self.users.write().await.retain(|u| u.id != Some(id));
        Ok(())
    }
}
