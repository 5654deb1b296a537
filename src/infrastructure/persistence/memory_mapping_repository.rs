//! Process-local mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewMapping, ShortUrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<ShortUrlMapping>,
}

/// A mapping repository that keeps rows in memory.
///
/// Mirrors the PostgreSQL semantics: insert-if-absent happens under a single
/// write lock, so concurrent creates of one key yield exactly one `true`.
/// Nothing survives a restart.
///
/// # Use Cases
///
/// - HTTP and service tests without a database
/// - Local experiments
#[derive(Default)]
pub struct InMemoryMappingRepository {
    inner: RwLock<Inner>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory mapping repository");
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn ping(&self) -> Result<i32, AppError> {
        Ok(1)
    }

    async fn find_target(&self, key: &str) -> Result<Option<String>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.target.clone()))
    }

    async fn list(&self) -> Result<Vec<ShortUrlMapping>, AppError> {
        let inner = self.inner.read().await;

        // Rows are appended in creation order.
        Ok(inner.rows.iter().rev().cloned().collect())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        if inner.rows.iter().any(|row| row.key == new_mapping.key) {
            return Ok(false);
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(ShortUrlMapping::new(
            id,
            new_mapping.key,
            new_mapping.target,
            Utc::now(),
        ));

        Ok(true)
    }

    async fn update_target(&self, key: &str, target: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        match inner.rows.iter_mut().find(|row| row.key == key) {
            Some(row) => {
                row.target = target.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        let before = inner.rows.len();
        inner.rows.retain(|row| row.key != key);

        Ok(inner.rows.len() < before)
    }
}
