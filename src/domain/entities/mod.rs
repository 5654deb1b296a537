//! Core domain entities.
//!
//! - [`ShortUrlMapping`] - A persisted key → target mapping
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{NewMapping, ShortUrlMapping};
