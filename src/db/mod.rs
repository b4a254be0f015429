mod error;
pub mod repos;
pub mod sqlite;

use std::sync::Arc;

pub use error::{DbError, DbResult};
pub use repos::*;

use crate::config::DatabaseConfig;

/// Cached repository trait objects, created once at startup.
struct CachedRepos {
    users: Arc<dyn UserRepo>,
    customers: Arc<dyn CustomerRepo>,
    cases: Arc<dyn CaseRepo>,
    engagements: Arc<dyn EngagementRepo>,
    documents: Arc<dyn DocumentRepo>,
    audit_logs: Arc<dyn AuditLogRepo>,
    reports: Arc<dyn ReportsRepo>,
}

/// Database pool with repositories cached at construction time to avoid
/// allocation on each access.
pub struct DbPool {
    pool: sqlx::SqlitePool,
    repos: CachedRepos,
}

impl DbPool {
    /// Create a `DbPool` from an existing SQLite pool.
    /// Primarily useful for testing.
    pub fn from_sqlite(pool: sqlx::SqlitePool) -> Self {
        let repos = CachedRepos {
            users: Arc::new(sqlite::SqliteUserRepo::new(pool.clone())),
            customers: Arc::new(sqlite::SqliteCustomerRepo::new(pool.clone())),
            cases: Arc::new(sqlite::SqliteCaseRepo::new(pool.clone())),
            engagements: Arc::new(sqlite::SqliteEngagementRepo::new(pool.clone())),
            documents: Arc::new(sqlite::SqliteDocumentRepo::new(pool.clone())),
            audit_logs: Arc::new(sqlite::SqliteAuditLogRepo::new(pool.clone())),
            reports: Arc::new(sqlite::SqliteReportsRepo::new(pool.clone())),
        };
        DbPool { pool, repos }
    }

    /// Create a database pool from configuration.
    pub async fn from_config(config: &DatabaseConfig) -> DbResult<Self> {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(
                sqlx::sqlite::SqliteConnectOptions::new()
                    .filename(&config.path)
                    .create_if_missing(config.create_if_missing)
                    .journal_mode(if config.wal_mode {
                        sqlx::sqlite::SqliteJournalMode::Wal
                    } else {
                        sqlx::sqlite::SqliteJournalMode::Delete
                    })
                    .busy_timeout(std::time::Duration::from_millis(config.busy_timeout_ms)),
            )
            .await?;

        Ok(Self::from_sqlite(pool))
    }

    /// Run database migrations using sqlx's migration runner.
    /// This automatically creates and manages a `_sqlx_migrations` table.
    pub async fn run_migrations(&self) -> DbResult<()> {
        tracing::info!("Running SQLite migrations");
        sqlx::migrate!("./migrations_sqlx/sqlite")
            .run(&self.pool)
            .await?;
        tracing::info!("Migrations completed successfully");
        Ok(())
    }

    /// Health check for database connectivity.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn users(&self) -> Arc<dyn UserRepo> {
        Arc::clone(&self.repos.users)
    }

    pub fn customers(&self) -> Arc<dyn CustomerRepo> {
        Arc::clone(&self.repos.customers)
    }

    pub fn cases(&self) -> Arc<dyn CaseRepo> {
        Arc::clone(&self.repos.cases)
    }

    pub fn engagements(&self) -> Arc<dyn EngagementRepo> {
        Arc::clone(&self.repos.engagements)
    }

    pub fn documents(&self) -> Arc<dyn DocumentRepo> {
        Arc::clone(&self.repos.documents)
    }

    pub fn audit_logs(&self) -> Arc<dyn AuditLogRepo> {
        Arc::clone(&self.repos.audit_logs)
    }

    pub fn reports(&self) -> Arc<dyn ReportsRepo> {
        Arc::clone(&self.repos.reports)
    }
}

/// Build an in-memory pool with migrations applied, for tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    use std::str::FromStr;

    // Unit and integration tests exercise repository CRUD logic in isolation,
    // seeding child rows with synthetic parent ids rather than a fully
    // populated graph. Disable foreign-key enforcement on the in-memory test
    // connection so these inserts are not rejected by referential integrity.
    let options = sqlx::sqlite::SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(false);
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create in-memory SQLite pool");

    let db = DbPool::from_sqlite(pool);
    db.run_migrations().await.expect("Failed to run migrations");
    db
}
