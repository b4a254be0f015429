use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::parse_uuid;
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::CustomerRepo,
    },
    models::{Customer, CustomerInput, CustomerQuery, CustomerStatus},
};

pub struct SqliteCustomerRepo {
    pool: SqlitePool,
}

impl SqliteCustomerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const CUSTOMER_COLUMNS: &str = "id, customer_id, customer_name, contact_person, contact_number, \
     email_address, industry_type, registration_date, customer_status, address_line, \
     created_by, created_at, updated_at";

fn customer_from_row(row: &SqliteRow) -> DbResult<Customer> {
    let status_raw: String = row.get("customer_status");
    let customer_status = CustomerStatus::parse(&status_raw).ok_or_else(|| {
        DbError::Internal(format!("Invalid customer status in database: {}", status_raw))
    })?;

    Ok(Customer {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        customer_id: row.get("customer_id"),
        customer_name: row.get("customer_name"),
        contact_person: row.get("contact_person"),
        contact_number: row.get("contact_number"),
        email_address: row.get("email_address"),
        industry_type: row.get("industry_type"),
        registration_date: row.get("registration_date"),
        customer_status,
        address_line: row.get("address_line"),
        created_by: parse_uuid(&row.get::<String, _>("created_by"))?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl CustomerRepo for SqliteCustomerRepo {
    async fn list(&self, query: CustomerQuery) -> DbResult<Vec<Customer>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(status) = &query.status {
            conditions.push("customer_status = ?");
            params.push(status.clone());
        }
        if let Some(industry) = &query.industry {
            conditions.push("industry_type = ?");
            params.push(industry.clone());
        }
        if let Some(search) = &query.search {
            conditions
                .push("(customer_name LIKE ? OR contact_person LIKE ? OR email_address LIKE ?)");
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

        let sql = format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers {where_clause} ORDER BY created_at DESC"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }

        let rows = query_builder.fetch_all(&self.pool).await?;
        rows.iter().map(customer_from_row).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Customer>> {
        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(customer_from_row).transpose()
    }

    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        let row = sqlx::query("SELECT 1 FROM customers WHERE customer_id = ?")
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create(
        &self,
        business_id: &str,
        input: CustomerInput,
        created_by: Uuid,
    ) -> DbResult<Customer> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO customers (
                id, customer_id, customer_name, contact_person, contact_number,
                email_address, industry_type, registration_date, customer_status,
                address_line, created_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(business_id)
        .bind(&input.customer_name)
        .bind(&input.contact_person)
        .bind(&input.contact_number)
        .bind(&input.email_address)
        .bind(&input.industry_type)
        .bind(input.registration_date)
        .bind(input.customer_status.as_str())
        .bind(&input.address_line)
        .bind(created_by.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            id,
            customer_id: business_id.to_string(),
            customer_name: input.customer_name,
            contact_person: input.contact_person,
            contact_number: input.contact_number,
            email_address: input.email_address,
            industry_type: input.industry_type,
            registration_date: input.registration_date,
            customer_status: input.customer_status,
            address_line: input.address_line,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: Uuid, input: CustomerInput) -> DbResult<Customer> {
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                customer_name = ?,
                contact_person = ?,
                contact_number = ?,
                email_address = ?,
                industry_type = ?,
                registration_date = ?,
                customer_status = ?,
                address_line = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.customer_name)
        .bind(&input.contact_person)
        .bind(&input.contact_number)
        .bind(&input.email_address)
        .bind(&input.industry_type)
        .bind(input.registration_date)
        .bind(input.customer_status.as_str())
        .bind(&input.address_line)
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
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
