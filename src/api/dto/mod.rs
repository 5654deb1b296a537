//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for presence checks. Format rules are enforced by the mapping service.

pub mod health;
pub mod url;
