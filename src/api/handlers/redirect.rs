//! Handler for short key redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Errors
///
/// Returns 400 Bad Request if the key is malformed.
/// Returns 404 Not Found if the key has no mapping.
/// Returns 500 Internal Server Error if storage fails.
pub async fn redirect_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let Path(key) = key?;
    let target = state.mapping_service.lookup(&key).await?;

    Ok(Redirect::temporary(&target))
}
