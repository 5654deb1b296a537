//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, list_urls_handler,
    ping_handler, redirect_handler, status_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Mapping management routes.
///
/// # Endpoints
///
/// - `GET    /urls/`       - List all mappings
/// - `POST   /urls/`       - Create a mapping
/// - `GET    /urls/{key}`  - Get a mapping
/// - `PUT    /urls/{key}`  - Replace a mapping's target
/// - `DELETE /urls/{key}`  - Delete a mapping
///
/// The collection is served both with and without the trailing slash.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/", get(list_urls_handler).post(create_url_handler))
        .route(
            "/urls/{key}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
}

/// Public service routes.
///
/// # Endpoints
///
/// - `GET /ping`    - Liveness probe
/// - `GET /status`  - Storage health
/// - `GET /{key}`   - Redirect to the mapped target
///
/// Static segments win over `/{key}`, so keys named `ping`, `status` or
/// `urls` can be managed but never redirected.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/status", get(status_handler))
        .route("/{key}", get(redirect_handler))
}
