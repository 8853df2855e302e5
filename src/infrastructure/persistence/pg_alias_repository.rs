//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repositories::AliasRepository;

/// PostgreSQL repository for alias mappings.
///
/// Every call is a single statement on the shared pool. Alias uniqueness is
/// enforced by the `UNIQUE` constraint on `url.alias`.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        _ => StoreError::Io(message),
    }
}

fn map_migrate_error(err: MigrateError) -> StoreError {
    match err {
        MigrateError::Execute(inner) => map_sqlx_error(inner),
        other => StoreError::Io(other.to_string()),
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(map_migrate_error)
    }

    async fn save_url(&self, new_mapping: NewMapping) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO url (url, alias, "user")
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new_mapping.destination)
        .bind(&new_mapping.alias)
        .bind(&new_mapping.owner)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AliasExists(new_mapping.alias.clone())
            } else {
                map_sqlx_error(e)
            }
        })
    }

    async fn get_url(&self, alias: &str) -> StoreResult<String> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StoreError::AliasNotFound(alias.to_string()))
    }

    async fn find_mapping(&self, alias: &str) -> StoreResult<Option<Mapping>> {
        sqlx::query_as::<_, Mapping>(r#"SELECT id, alias, url, "user" FROM url WHERE alias = $1"#)
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete_alias(&self, alias: &str, owner: &str) -> StoreResult<()> {
        // Both CTEs run against one snapshot: `target` reports the owner as it
        // was when the statement started, `removed` the rows actually deleted.
        let (current_owner, removed) = sqlx::query_as::<_, (Option<String>, i64)>(
            r#"
            WITH target AS (
                SELECT "user" FROM url WHERE alias = $1
            ),
            removed AS (
                DELETE FROM url WHERE alias = $1 AND "user" = $2
                RETURNING id
            )
            SELECT
                (SELECT "user" FROM target) AS current_owner,
                (SELECT COUNT(*) FROM removed) AS removed
            "#,
        )
        .bind(alias)
        .bind(owner)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        if removed > 0 {
            return Ok(());
        }

        // Zero rows and a matching owner means a concurrent delete won the race.
        match current_owner {
            Some(stored) if stored != owner => Err(StoreError::WrongUser(alias.to_string())),
            _ => Ok(()),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}
