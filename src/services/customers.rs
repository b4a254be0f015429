use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{DbPool, DbResult},
    models::{Customer, CustomerInput, CustomerQuery},
};

/// Service layer for customer operations.
#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DbPool>,
}

impl CustomerService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: CustomerQuery) -> DbResult<Vec<Customer>> {
        self.db.customers().list(query).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Customer>> {
        self.db.customers().get_by_id(id).await
    }

    pub async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        self.db.customers().business_id_exists(business_id).await
    }

    pub async fn create(
        &self,
        business_id: &str,
        input: CustomerInput,
        created_by: Uuid,
    ) -> DbResult<Customer> {
        self.db.customers().create(business_id, input, created_by).await
    }

    pub async fn update(&self, id: Uuid, input: CustomerInput) -> DbResult<Customer> {
        self.db.customers().update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> DbResult<bool> {
        self.db.customers().delete(id).await
    }

    /// Cases for this customer whose status is outside Closed/Dismissed.
    pub async fn active_case_count(&self, customer_id: Uuid) -> DbResult<i64> {
        self.db.cases().count_active_by_client(customer_id).await
    }
}
