use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{DbPool, DbResult},
    models::{NewUser, User},
};

/// Service layer for user operations.
#[derive(Clone)]
pub struct UserService {
    db: Arc<DbPool>,
}

impl UserService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewUser) -> DbResult<User> {
        self.db.users().create(input).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<User>> {
        self.db.users().get_by_id(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.db.users().get_by_email(email).await
    }
}
