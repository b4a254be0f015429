use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{DbPool, DbResult},
    models::{Engagement, EngagementInput, EngagementQuery},
};

/// Service layer for engagement operations.
#[derive(Clone)]
pub struct EngagementService {
    db: Arc<DbPool>,
}

impl EngagementService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: EngagementQuery) -> DbResult<Vec<Engagement>> {
        self.db.engagements().list(query).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Engagement>> {
        self.db.engagements().get_by_id(id).await
    }

    pub async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        self.db.engagements().business_id_exists(business_id).await
    }

    pub async fn create(
        &self,
        business_id: &str,
        input: EngagementInput,
        recorded_by: Uuid,
    ) -> DbResult<Engagement> {
        self.db
            .engagements()
            .create(business_id, input, recorded_by)
            .await
    }

    pub async fn update(&self, id: Uuid, input: EngagementInput) -> DbResult<Engagement> {
        self.db.engagements().update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> DbResult<bool> {
        self.db.engagements().delete(id).await
    }
}
