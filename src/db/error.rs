use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Not found")]
    NotFound,

    #[allow(dead_code)] // Error variant consumed via From impls
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DbResult<T> = Result<T, DbError>;
