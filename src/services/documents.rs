use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{DbPool, DbResult},
    models::{Document, DocumentInput, DocumentQuery},
};

/// Service layer for document references.
#[derive(Clone)]
pub struct DocumentService {
    db: Arc<DbPool>,
}

impl DocumentService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: DocumentQuery) -> DbResult<Vec<Document>> {
        self.db.documents().list(query).await
    }

    pub async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        self.db.documents().business_id_exists(business_id).await
    }

    pub async fn create(
        &self,
        business_id: &str,
        input: DocumentInput,
        uploaded_by: Uuid,
    ) -> DbResult<Document> {
        self.db
            .documents()
            .create(business_id, input, uploaded_by)
            .await
    }
}
