use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::{NewUser, User, UserError, UserPatch, UserResult};

/// In-memory implementation of UserRepository
///
/// Records live in a map guarded by a single read-write lock. The lock is
/// held only for the map access itself, so each operation is atomic but
/// there is no isolation across operations.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> UserResult<User> {
        let user = User::new(Uuid::new_v4(), new_user);
        self.users.write().await.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> UserResult<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserError::NotFound)?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> UserResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(UserError::NotFound)
    }
}
