//! Application layer services implementing business logic.
//!
//! Services validate input, call repository traits and translate storage
//! outcomes into domain results. HTTP handlers and the admin CLI both go
//! through this layer.
//!
//! - [`services::mapping_service::MappingService`] - The mapping store
//!   (lookup, list, create, update, delete, health)

pub mod services;
