use async_trait::async_trait;

use crate::{
    db::error::DbResult,
    models::{AuditLog, AuditLogQuery, CreateAuditLog},
};

#[async_trait]
pub trait AuditLogRepo: Send + Sync {
    /// Append one immutable audit entry. Existing entries are never touched;
    /// no update or delete exists on this repository.
    async fn create(&self, input: CreateAuditLog) -> DbResult<AuditLog>;

    /// List audit entries matching the filters, newest first, capped by the
    /// query limit.
    async fn list(&self, query: AuditLogQuery) -> DbResult<Vec<AuditLog>>;
}
