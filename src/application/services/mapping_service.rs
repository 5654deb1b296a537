//! Mapping store: validation and persistence of key → target mappings.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{NewMapping, ShortUrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::validators::{
    DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_URL_LENGTH, validate_key, validate_url,
};

/// Sentinel returned by a healthy storage round trip.
const ALIVE_SENTINEL: i32 = 1;

/// Configured length limits for keys and targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_key_length: usize,
    pub max_url_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            max_url_length: DEFAULT_MAX_URL_LENGTH,
        }
    }
}

/// Service owning validation and persistence for short URL mappings.
///
/// Input is always validated before any storage call. Absence and duplicate
/// keys are ordinary results (`false`), except for [`Self::lookup`] which has
/// nothing to return and fails with [`AppError::NotFound`].
///
/// The service holds no mutable state and is shared across request tasks.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    limits: ValidationLimits,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>, limits: ValidationLimits) -> Self {
        Self { repository, limits }
    }

    /// Returns the configured length limits.
    pub fn limits(&self) -> ValidationLimits {
        self.limits
    }

    /// Checks that storage answers a trivial round trip.
    ///
    /// Never fails: any error or unexpected value yields `false`.
    pub async fn check_alive(&self) -> bool {
        match self.repository.ping().await {
            Ok(ALIVE_SENTINEL) => true,
            Ok(other) => {
                warn!(value = other, "Storage health check returned unexpected value");
                false
            }
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                false
            }
        }
    }

    /// Returns the target URL for a key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is malformed.
    /// Returns [`AppError::NotFound`] if no mapping exists for the key.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn lookup(&self, key: &str) -> Result<String, AppError> {
        self.check_key(key)?;

        let target = self.repository.find_target(key).await?;
        debug!(key, found = target.is_some(), "Looked up mapping");

        target.ok_or_else(|| AppError::not_found(format!("URL with key '{key}' not found")))
    }

    /// Returns every mapping, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<ShortUrlMapping>, AppError> {
        self.repository.list().await
    }

    /// Creates a mapping.
    ///
    /// Returns `Ok(false)` if the key already exists; the existing mapping is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key or target is malformed or
    /// too long.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, key: &str, target: &str) -> Result<bool, AppError> {
        self.check_key(key)?;
        self.check_target(target)?;

        let created = self
            .repository
            .insert(NewMapping {
                key: key.to_string(),
                target: target.to_string(),
            })
            .await?;

        if created {
            info!(key, "Created mapping");
        } else {
            debug!(key, "Mapping already exists");
        }

        Ok(created)
    }

    /// Replaces the target of an existing mapping.
    ///
    /// Returns `Ok(false)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key or target is malformed or
    /// too long.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, key: &str, new_target: &str) -> Result<bool, AppError> {
        self.check_key(key)?;
        self.check_target(new_target)?;

        let updated = self.repository.update_target(key, new_target).await?;
        if updated {
            info!(key, "Updated mapping target");
        }

        Ok(updated)
    }

    /// Deletes a mapping.
    ///
    /// Returns `Ok(false)` if the key does not exist, so repeating a delete
    /// is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is malformed.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, key: &str) -> Result<bool, AppError> {
        self.check_key(key)?;

        let deleted = self.repository.delete(key).await?;
        if deleted {
            info!(key, "Deleted mapping");
        }

        Ok(deleted)
    }

    /// Checks a key against the configured limit, length first, then format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] describing the first rule the key breaks.
    pub fn check_key(&self, key: &str) -> Result<(), AppError> {
        let max = self.limits.max_key_length;

        if key.chars().count() > max {
            return Err(AppError::bad_request(format!(
                "URL key exceeds maximum length of {max}"
            )));
        }

        if !validate_key(key, max) {
            return Err(AppError::bad_request(format!(
                "Invalid URL key format: {key}"
            )));
        }

        Ok(())
    }

    fn check_target(&self, target: &str) -> Result<(), AppError> {
        let max = self.limits.max_url_length;

        if target.chars().count() > max {
            return Err(AppError::bad_request(format!(
                "Target URL exceeds maximum length of {max}"
            )));
        }

        if !validate_url(target, max) {
            return Err(AppError::bad_request(format!(
                "Invalid target URL format: {target}"
            )));
        }

        Ok(())
    }
}
