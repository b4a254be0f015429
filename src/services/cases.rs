use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{DbPool, DbResult},
    models::{Case, CaseInput, CaseQuery},
};

/// Service layer for case operations.
#[derive(Clone)]
pub struct CaseService {
    db: Arc<DbPool>,
}

impl CaseService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: CaseQuery) -> DbResult<Vec<Case>> {
        self.db.cases().list(query).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Case>> {
        self.db.cases().get_by_id(id).await
    }

    pub async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        self.db.cases().business_id_exists(business_id).await
    }

    pub async fn create(
        &self,
        business_id: &str,
        input: CaseInput,
        created_by: Uuid,
    ) -> DbResult<Case> {
        self.db.cases().create(business_id, input, created_by).await
    }

    pub async fn update(&self, id: Uuid, input: CaseInput) -> DbResult<Case> {
        self.db.cases().update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> DbResult<bool> {
        self.db.cases().delete(id).await
    }
}
