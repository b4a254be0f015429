//! Audit trail service.
//!
//! The write path is best-effort: the business mutation it documents has
//! already committed by the time `record` runs, and the two are not part of
//! one transaction. A failed audit write is logged server-side and never
//! rolls back or fails the request. The read path likewise degrades to an
//! empty list rather than surfacing a persistence error.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::{
    db::DbPool,
    middleware::ClientInfo,
    models::{AuditAction, AuditLog, AuditLogQuery, CreateAuditLog, EntityKind},
};

/// Service layer for audit log operations.
#[derive(Clone)]
pub struct AuditLogService {
    db: Arc<DbPool>,
}

impl AuditLogService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Append one audit entry for a completed mutation. Best-effort; a
    /// write failure is logged at WARN and swallowed.
    pub async fn record(
        &self,
        actor_id: Uuid,
        action: AuditAction,
        entity_type: EntityKind,
        entity_id: Uuid,
        changes: Option<JsonValue>,
        client_info: &ClientInfo,
    ) {
        let entry = CreateAuditLog {
            actor_id,
            action,
            entity_type,
            entity_id,
            changes,
            ip_address: client_info.ip_address.clone(),
            user_agent: client_info.user_agent.clone(),
        };

        if let Err(e) = self.db.audit_logs().create(entry).await {
            tracing::warn!(
                error = %e,
                %action,
                %entity_type,
                %entity_id,
                "Failed to write audit log entry"
            );
        }
    }

    /// Read audit entries, newest first. A persistence failure yields an
    /// empty list, never an error.
    #[allow(dead_code)] // Read path for operational tooling; exercised by the router tests
    pub async fn query(&self, query: AuditLogQuery) -> Vec<AuditLog> {
        match self.db.audit_logs().list(query).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read audit log");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_record_and_query() {
        let db = Arc::new(test_pool().await);
        let service = AuditLogService::new(db);
        let actor = Uuid::new_v4();
        let entity = Uuid::new_v4();

        service
            .record(
                actor,
                AuditAction::Create,
                EntityKind::Customer,
                entity,
                None,
                &ClientInfo::default(),
            )
            .await;

        let entries = service
            .query(AuditLogQuery {
                entity_id: Some(entity),
                ..Default::default()
            })
            .await;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].actor_id, actor);
        assert_eq!(entries[0].action, AuditAction::Create);
    }
}
