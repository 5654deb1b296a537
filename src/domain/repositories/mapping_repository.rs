//! Repository trait for key → target mapping storage.

use crate::domain::entities::{NewMapping, ShortUrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short URL mappings.
///
/// Implementations never validate input; callers pass keys and targets that
/// have already been checked. "Absent" and "already exists" are ordinary
/// results (`None` / `false`), never errors. Every `Err` is a storage failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Performs a trivial round trip and returns the sentinel value read back.
    ///
    /// Healthy storage returns `1`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the round trip fails.
    async fn ping(&self) -> Result<i32, AppError>;

    /// Finds the target for a key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_target(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Lists every mapping, newest first by `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<ShortUrlMapping>, AppError>;

    /// Inserts a mapping.
    ///
    /// Returns `Ok(false)` without touching the existing row when the key is
    /// already taken. Uniqueness is enforced atomically by the store itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<bool, AppError>;

    /// Replaces the target of an existing mapping.
    ///
    /// Returns `Ok(false)` if no mapping has this key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_target(&self, key: &str, target: &str) -> Result<bool, AppError>;

    /// Removes a mapping.
    ///
    /// Returns `Ok(false)` if no mapping has this key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, key: &str) -> Result<bool, AppError>;
}
