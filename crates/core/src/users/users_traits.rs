use async_trait::async_trait;

use super::users_model::{NewUser, NewUserRecord, User};
use crate::errors::Result;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    /// Fails with a unique violation when the email is already stored.
    async fn insert_user(&self, record: NewUserRecord) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<User>;
    /// Returns the user when `password` matches the stored hash.
    fn authenticate(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
}
