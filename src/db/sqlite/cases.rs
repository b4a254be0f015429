use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::{parse_uuid, parse_uuid_opt};
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::CaseRepo,
    },
    models::{Case, CaseInput, CaseQuery, CaseStatus},
};

pub struct SqliteCaseRepo {
    pool: SqlitePool,
}

impl SqliteCaseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const CASE_SELECT: &str = "SELECT c.id, c.case_id, c.case_title, c.client_id, c.case_type, \
     c.case_status, c.assigned_attorney, c.filing_date, c.court_name, c.hearing_date, \
     c.created_by, c.created_at, c.updated_at, \
     cu.customer_name AS customer_name, u.name AS attorney_name \
     FROM cases c \
     LEFT JOIN customers cu ON c.client_id = cu.id \
     LEFT JOIN users u ON c.assigned_attorney = u.id";

pub(super) fn case_from_row(row: &SqliteRow) -> DbResult<Case> {
    let status_raw: String = row.get("case_status");
    let case_status = CaseStatus::parse(&status_raw)
        .ok_or_else(|| DbError::Internal(format!("Invalid case status in database: {}", status_raw)))?;

    Ok(Case {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        case_id: row.get("case_id"),
        case_title: row.get("case_title"),
        client_id: parse_uuid(&row.get::<String, _>("client_id"))?,
        case_type: row.get("case_type"),
        case_status,
        assigned_attorney: parse_uuid_opt(row.get("assigned_attorney"))?,
        filing_date: row.get("filing_date"),
        court_name: row.get("court_name"),
        hearing_date: row.get("hearing_date"),
        created_by: parse_uuid(&row.get::<String, _>("created_by"))?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        customer_name: row.get("customer_name"),
        attorney_name: row.get("attorney_name"),
    })
}

#[async_trait]
impl CaseRepo for SqliteCaseRepo {
    async fn list(&self, query: CaseQuery) -> DbResult<Vec<Case>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(status) = &query.status {
            conditions.push("c.case_status = ?");
            params.push(status.clone());
        }
        if let Some(attorney) = &query.attorney {
            conditions.push("c.assigned_attorney = ?");
            params.push(attorney.to_string());
        }
        if let Some(client) = &query.client {
            conditions.push("c.client_id = ?");
            params.push(client.to_string());
        }
        if let Some(search) = &query.search {
            conditions.push("(c.case_title LIKE ? OR c.case_id LIKE ? OR cu.customer_name LIKE ?)");
            let pattern = format!("%{}%", search);
            params.push(pattern.clone());
            params.push(pattern.clone());
            params.push(pattern);
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("{CASE_SELECT} {where_clause} ORDER BY c.created_at DESC");

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }

        let rows = query_builder.fetch_all(&self.pool).await?;
        rows.iter().map(case_from_row).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Case>> {
        let row = sqlx::query(&format!("{CASE_SELECT} WHERE c.id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(case_from_row).transpose()
    }

    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        let row = sqlx::query("SELECT 1 FROM cases WHERE case_id = ?")
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create(
        &self,
        business_id: &str,
        input: CaseInput,
        created_by: Uuid,
    ) -> DbResult<Case> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cases (
                id, case_id, case_title, client_id, case_type, case_status,
                assigned_attorney, filing_date, court_name, hearing_date,
                created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(business_id)
        .bind(&input.case_title)
        .bind(input.client_id.to_string())
        .bind(&input.case_type)
        .bind(input.case_status.as_str())
        .bind(input.assigned_attorney.map(|a| a.to_string()))
        .bind(input.filing_date)
        .bind(&input.court_name)
        .bind(input.hearing_date)
        .bind(created_by.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Re-select to pick up the joined customer and attorney names.
        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }

    async fn update(&self, id: Uuid, input: CaseInput) -> DbResult<Case> {
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE cases SET
                case_title = ?,
                client_id = ?,
                case_type = ?,
                case_status = ?,
                assigned_attorney = ?,
                filing_date = ?,
                court_name = ?,
                hearing_date = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.case_title)
        .bind(input.client_id.to_string())
        .bind(&input.case_type)
        .bind(input.case_status.as_str())
        .bind(input.assigned_attorney.map(|a| a.to_string()))
        .bind(input.filing_date)
        .bind(&input.court_name)
        .bind(input.hearing_date)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM cases WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_active_by_client(&self, client_id: Uuid) -> DbResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM cases \
             WHERE client_id = ? AND case_status NOT IN ('Closed', 'Dismissed')",
        )
        .bind(client_id.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("count"))
    }
}
