//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, ShortUrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_key;

/// Row shape of the `short_urls` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    url_key: String,
    target: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for ShortUrlMapping {
    fn from(row: MappingRow) -> Self {
        ShortUrlMapping::new(row.id, row.url_key, row.target, row.created_at)
    }
}

/// PostgreSQL repository for short URL mappings.
///
/// Each operation is a single statement on a pooled connection, so writes are
/// committed atomically and the connection returns to the pool on every exit
/// path. Key uniqueness is enforced by the `short_urls_url_key_key` constraint.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn ping(&self) -> Result<i32, AppError> {
        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(value)
    }

    async fn find_target(&self, key: &str) -> Result<Option<String>, AppError> {
        let target = sqlx::query_scalar::<_, String>(
            "SELECT target FROM short_urls WHERE url_key = $1",
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }

    async fn list(&self) -> Result<Vec<ShortUrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, url_key, target, created_at
            FROM short_urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrlMapping::from).collect())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<bool, AppError> {
        let result = sqlx::query("INSERT INTO short_urls (url_key, target) VALUES ($1, $2)")
            .bind(&new_mapping.key)
            .bind(&new_mapping.target)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation_on_key(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_target(&self, key: &str, target: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE short_urls SET target = $1 WHERE url_key = $2")
            .bind(target)
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE url_key = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
