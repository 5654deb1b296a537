//! Handlers for mapping management endpoints (get, list, create, update, delete).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::url::{CreateUrlRequest, UpdateUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single mapping.
///
/// # Endpoint
///
/// `GET /urls/{key}`
///
/// # Errors
///
/// Returns 400 Bad Request if the key is malformed.
/// Returns 404 Not Found if the key has no mapping.
pub async fn get_url_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let Path(key) = key?;
    let target = state.mapping_service.lookup(&key).await?;

    Ok(Json(UrlResponse::new(key, target)))
}

/// Lists every mapping, newest first.
///
/// # Endpoint
///
/// `GET /urls/`
///
/// An empty store yields `[]`.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let mappings = state.mapping_service.list_all().await?;

    Ok(Json(mappings.into_iter().map(UrlResponse::from).collect()))
}

/// Creates a mapping.
///
/// # Endpoint
///
/// `POST /urls/`
///
/// # Request Body
///
/// ```json
/// { "short_url": "wkp", "target_url": "https://www.wikipedia.org" }
/// ```
///
/// Responds 201 Created echoing the body.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, a malformed key or target.
/// Returns 409 Conflict if the key already exists.
pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state
        .mapping_service
        .create(&payload.short_url, &payload.target_url)
        .await?;

    if !created {
        return Err(AppError::conflict(format!(
            "URL with key '{}' already exists",
            payload.short_url
        )));
    }

    Ok((
        StatusCode::CREATED,
        Json(UrlResponse::new(payload.short_url, payload.target_url)),
    ))
}

/// Replaces the target of an existing mapping.
///
/// # Endpoint
///
/// `PUT /urls/{key}`
///
/// # Request Body
///
/// ```json
/// { "target_url": "https://www.wikipedia.org/wiki/Rust" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed key, malformed JSON or a missing or
/// malformed target.
/// Returns 404 Not Found if the key has no mapping.
pub async fn update_url_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateUrlRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    // Path key is checked before the body is looked at.
    let Path(key) = key?;
    state.mapping_service.check_key(&key)?;

    let Json(payload) = payload?;
    payload.validate()?;

    let updated = state
        .mapping_service
        .update(&key, &payload.target_url)
        .await?;

    if !updated {
        return Err(AppError::not_found(format!("URL with key '{key}' not found")));
    }

    Ok(Json(UrlResponse::new(key, payload.target_url)))
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /urls/{key}`
///
/// Responds 204 No Content.
///
/// # Errors
///
/// Returns 400 Bad Request if the key is malformed.
/// Returns 404 Not Found if the key has no mapping, including on a repeated
/// delete.
pub async fn delete_url_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(key) = key?;
    let deleted = state.mapping_service.delete(&key).await?;

    if !deleted {
        return Err(AppError::not_found(format!("URL with key '{key}' not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
