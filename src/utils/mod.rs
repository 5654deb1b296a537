//! Utility functions shared across layers.
//!
//! - [`validators`] - Short key and target URL validation
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod validators;
