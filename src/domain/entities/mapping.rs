//! Mapping entity: a short key and the URL it redirects to.

use chrono::{DateTime, Utc};

/// A persisted key → target mapping.
///
/// `key` and `created_at` never change after creation; only `target` may be
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlMapping {
    pub id: i64,
    pub key: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlMapping {
    /// Creates a new mapping instance.
    pub fn new(id: i64, key: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            key,
            target,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// Both fields are expected to be validated already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub key: String,
    pub target: String,
}
