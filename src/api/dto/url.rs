//! DTOs for the mapping management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrlMapping;

/// Request body for `POST /urls/`.
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "short_url is required"))]
    pub short_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "target_url is required"))]
    pub target_url: String,
}

/// Request body for `PUT /urls/{key}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "target_url is required"))]
    pub target_url: String,
}

/// A mapping as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub short_url: String,
    pub target_url: String,
}

impl UrlResponse {
    pub fn new(short_url: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            target_url: target_url.into(),
        }
    }
}

impl From<ShortUrlMapping> for UrlResponse {
    fn from(mapping: ShortUrlMapping) -> Self {
        Self {
            short_url: mapping.key,
            target_url: mapping.target,
        }
    }
}
