use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::{parse_uuid, parse_uuid_opt};
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::UserRepo,
    },
    models::{NewUser, Role, User},
};

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &SqliteRow) -> DbResult<User> {
    let role_raw: String = row.get("role");
    let role = Role::parse(&role_raw)
        .ok_or_else(|| DbError::Internal(format!("Invalid role in database: {}", role_raw)))?;

    Ok(User {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        email: row.get("email"),
        name: row.get("name"),
        password_hash: row.get("password_hash"),
        role,
        customer_id: parse_uuid_opt(row.get("customer_id"))?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

const USER_COLUMNS: &str =
    "id, email, name, password_hash, role, customer_id, created_at, updated_at";

#[async_trait]
impl UserRepo for SqliteUserRepo {
    async fn create(&self, input: NewUser) -> DbResult<User> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, role, customer_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.password_hash)
        .bind(input.role.as_str())
        .bind(input.customer_id.map(|c| c.to_string()))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            email: input.email,
            name: input.name,
            password_hash: input.password_hash,
            role: input.role,
            customer_id: input.customer_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        // The email column is declared COLLATE NOCASE, so equality here is
        // case-insensitive.
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}
