use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::parse_uuid;
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::DocumentRepo,
    },
    models::{Document, DocumentInput, DocumentQuery, EntityKind},
};

pub struct SqliteDocumentRepo {
    pool: SqlitePool,
}

impl SqliteDocumentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const DOCUMENT_SELECT: &str = "SELECT d.id, d.document_id, d.entity_type, d.entity_id, \
     d.document_name, d.document_url, d.uploaded_by, d.uploaded_at, \
     u.name AS uploader_name \
     FROM documents d \
     LEFT JOIN users u ON d.uploaded_by = u.id";

fn document_from_row(row: &SqliteRow) -> DbResult<Document> {
    let kind_raw: String = row.get("entity_type");
    let entity_type = EntityKind::parse(&kind_raw)
        .ok_or_else(|| DbError::Internal(format!("Invalid entity type in database: {}", kind_raw)))?;

    Ok(Document {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        document_id: row.get("document_id"),
        entity_type,
        entity_id: parse_uuid(&row.get::<String, _>("entity_id"))?,
        document_name: row.get("document_name"),
        document_url: row.get("document_url"),
        uploaded_by: parse_uuid(&row.get::<String, _>("uploaded_by"))?,
        uploaded_at: row.get("uploaded_at"),
        uploader_name: row.get("uploader_name"),
    })
}

#[async_trait]
impl DocumentRepo for SqliteDocumentRepo {
    async fn list(&self, query: DocumentQuery) -> DbResult<Vec<Document>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(entity_type) = &query.entity_type {
            conditions.push("d.entity_type = ?");
            params.push(entity_type.as_str().to_string());
        }
        if let Some(entity_id) = &query.entity_id {
            conditions.push("d.entity_id = ?");
            params.push(entity_id.to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("{DOCUMENT_SELECT} {where_clause} ORDER BY d.uploaded_at DESC");

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }

        let rows = query_builder.fetch_all(&self.pool).await?;
        rows.iter().map(document_from_row).collect()
    }

    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        let row = sqlx::query("SELECT 1 FROM documents WHERE document_id = ?")
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create(
        &self,
        business_id: &str,
        input: DocumentInput,
        uploaded_by: Uuid,
    ) -> DbResult<Document> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO documents (
                id, document_id, entity_type, entity_id, document_name,
                document_url, uploaded_by, uploaded_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(business_id)
        .bind(input.entity_type.as_str())
        .bind(input.entity_id.to_string())
        .bind(&input.document_name)
        .bind(&input.document_url)
        .bind(uploaded_by.to_string())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Document {
            id,
            document_id: business_id.to_string(),
            entity_type: input.entity_type,
            entity_id: input.entity_id,
            document_name: input.document_name,
            document_url: input.document_url,
            uploaded_by,
            uploaded_at: now,
            uploader_name: None,
        })
    }
}
