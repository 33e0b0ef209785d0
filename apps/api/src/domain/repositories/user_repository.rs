use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{NewUser, User, UserPatch, UserResult};

/// Repository trait for User records
///
/// Defines the storage contract shared by every adapter. Implementations
/// report a missing record as `UserError::NotFound` and every other failure
/// as `UserError::Storage`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly generated identifier
    async fn create(&self, new_user: NewUser) -> UserResult<User>;

    /// Find a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<User>;

    /// Return every stored user, in no particular order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Merge the present fields of `patch` onto the stored user
    async fn update(&self, id: Uuid, patch: UserPatch) -> UserResult<User>;

    /// Permanently remove a user
    async fn delete(&self, id: Uuid) -> UserResult<()>;
}
