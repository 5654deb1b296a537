//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /ping`        - Liveness probe
//! - `GET  /status`      - Storage health (`{"db_up": "true" | "false"}`)
//! - `GET  /{key}`       - Short key redirect (307)
//! - `/urls/*`           - Mapping management (JSON)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(tracing::layer())
}
