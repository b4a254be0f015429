use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::DbResult,
    models::{Engagement, EngagementInput, EngagementQuery},
};

#[async_trait]
pub trait EngagementRepo: Send + Sync {
    /// List engagements matching the filters, most recent engagement date
    /// first, with customer and recorder names joined in.
    async fn list(&self, query: EngagementQuery) -> DbResult<Vec<Engagement>>;

    /// Get an engagement by ID with joined names.
    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Engagement>>;

    /// Whether the human-facing business id is already taken.
    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool>;

    /// Insert a new engagement.
    async fn create(
        &self,
        business_id: &str,
        input: EngagementInput,
        recorded_by: Uuid,
    ) -> DbResult<Engagement>;

    /// Replace an engagement's fields. Returns `DbError::NotFound` if absent.
    async fn update(&self, id: Uuid, input: EngagementInput) -> DbResult<Engagement>;

    /// Delete an engagement. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> DbResult<bool>;
}
