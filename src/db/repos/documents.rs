use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::error::DbResult,
    models::{Document, DocumentInput, DocumentQuery},
};

#[async_trait]
pub trait DocumentRepo: Send + Sync {
    /// List documents matching the filters, newest upload first, with the
    /// uploader name joined in.
    async fn list(&self, query: DocumentQuery) -> DbResult<Vec<Document>>;

    /// Whether the human-facing business id is already taken.
    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool>;

    /// Register a new document reference.
    async fn create(
        &self,
        business_id: &str,
        input: DocumentInput,
        uploaded_by: Uuid,
    ) -> DbResult<Document>;
}
