use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::parse_uuid;
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::AuditLogRepo,
    },
    models::{AuditAction, AuditLog, AuditLogQuery, CreateAuditLog, EntityKind},
};

/// Default result cap when the caller does not supply one.
const DEFAULT_LIMIT: i64 = 100;

pub struct SqliteAuditLogRepo {
    pool: SqlitePool,
}

impl SqliteAuditLogRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn audit_log_from_row(row: &SqliteRow) -> DbResult<AuditLog> {
    let action_raw: String = row.get("action");
    let action = AuditAction::parse(&action_raw)
        .ok_or_else(|| DbError::Internal(format!("Invalid audit action in database: {}", action_raw)))?;

    let kind_raw: String = row.get("entity_type");
    let entity_type = EntityKind::parse(&kind_raw)
        .ok_or_else(|| DbError::Internal(format!("Invalid entity type in database: {}", kind_raw)))?;

    let changes: Option<String> = row.get("changes");
    let changes = changes
        .map(|raw| serde_json::from_str(&raw))
        .transpose()?;

    Ok(AuditLog {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        actor_id: parse_uuid(&row.get::<String, _>("actor_id"))?,
        action,
        entity_type,
        entity_id: parse_uuid(&row.get::<String, _>("entity_id"))?,
        changes,
        ip_address: row.get("ip_address"),
        user_agent: row.get("user_agent"),
        created_at: row.get("created_at"),
    })
}

#[async_trait]
impl AuditLogRepo for SqliteAuditLogRepo {
    async fn create(&self, input: CreateAuditLog) -> DbResult<AuditLog> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();
        let changes_json = input
            .changes
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO audit_logs (
                id, actor_id, action, entity_type, entity_id,
                changes, ip_address, user_agent, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(input.actor_id.to_string())
        .bind(input.action.as_str())
        .bind(input.entity_type.as_str())
        .bind(input.entity_id.to_string())
        .bind(&changes_json)
        .bind(&input.ip_address)
        .bind(&input.user_agent)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(AuditLog {
            id,
            actor_id: input.actor_id,
            action: input.action,
            entity_type: input.entity_type,
            entity_id: input.entity_id,
            changes: input.changes,
            ip_address: input.ip_address,
            user_agent: input.user_agent,
            created_at: now,
        })
    }

    async fn list(&self, query: AuditLogQuery) -> DbResult<Vec<AuditLog>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(entity_type) = &query.entity_type {
            conditions.push("entity_type = ?");
            params.push(entity_type.as_str().to_string());
        }
        if let Some(entity_id) = &query.entity_id {
            conditions.push("entity_id = ?");
            params.push(entity_id.to_string());
        }
        if let Some(actor_id) = &query.actor_id {
            conditions.push("actor_id = ?");
            params.push(actor_id.to_string());
        }
        if let Some(from) = &query.from {
            conditions.push("created_at >= ?");
            params.push(from.to_rfc3339());
        }
        if let Some(to) = &query.to {
            conditions.push("created_at < ?");
            params.push(to.to_rfc3339());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT id, actor_id, action, entity_type, entity_id, changes, \
             ip_address, user_agent, created_at \
             FROM audit_logs {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ?"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }
        query_builder = query_builder.bind(query.limit.unwrap_or(DEFAULT_LIMIT).max(0));

        let rows = query_builder.fetch_all(&self.pool).await?;
        rows.iter().map(audit_log_from_row).collect()
    }
}
