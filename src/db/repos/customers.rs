use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::DbResult,
    models::{Customer, CustomerInput, CustomerQuery},
};

#[async_trait]
pub trait CustomerRepo: Send + Sync {
    /// List customers matching the filters, newest-created first.
    async fn list(&self, query: CustomerQuery) -> DbResult<Vec<Customer>>;

    /// Get a customer by ID.
    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Customer>>;

    /// Whether the human-facing business id is already taken.
    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool>;

    /// Insert a new customer.
    async fn create(
        &self,
        business_id: &str,
        input: CustomerInput,
        created_by: Uuid,
    ) -> DbResult<Customer>;

    /// Replace a customer's fields. Returns `DbError::NotFound` if absent.
    async fn update(&self, id: Uuid, input: CustomerInput) -> DbResult<Customer>;

    /// Delete a customer. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DbResult<bool>;
}
