use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::DbResult,
    models::{NewUser, User},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Create a new user. The email must already be normalized to lowercase.
    async fn create(&self, input: NewUser) -> DbResult<User>;

    /// Get a user by ID.
    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<User>>;

    /// Get a user by email (case-insensitive).
    async fn get_by_email(&self, email: &str) -> DbResult<Option<User>>;
}
