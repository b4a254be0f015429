use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::DbResult,
    models::{Case, CaseInput, CaseQuery},
};

#[async_trait]
pub trait CaseRepo: Send + Sync {
    /// List cases matching the filters, newest-created first, with customer
    /// and attorney names joined in.
    async fn list(&self, query: CaseQuery) -> DbResult<Vec<Case>>;

    /// Get a case by ID with joined names.
    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Case>>;

    /// Whether the human-facing business id is already taken.
    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool>;

    /// Insert a new case.
    async fn create(&self, business_id: &str, input: CaseInput, created_by: Uuid)
    -> DbResult<Case>;

    /// Replace a case's fields. Returns `DbError::NotFound` if absent.
    async fn update(&self, id: Uuid, input: CaseInput) -> DbResult<Case>;

    /// Delete a case. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DbResult<bool>;

    /// Number of the customer's cases whose status is not terminal
    /// (outside Closed/Dismissed). Gates customer deletion.
    async fn count_active_by_client(&self, client_id: Uuid) -> DbResult<i64>;
}
