//! Liveness and storage status handlers.

use axum::{Json, extract::State};

use crate::api::dto::health::{PingResponse, StatusResponse};
use crate::state::AppState;

/// Answers a liveness probe without touching storage.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response
///
/// ```json
/// { "ping": "pong" }
/// ```
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse { ping: "pong" })
}

/// Reports whether storage answers a round trip.
///
/// # Endpoint
///
/// `GET /status`
///
/// Always 200; a broken database is reported in the body, not the status code.
///
/// ```json
/// { "db_up": "true" }
/// ```
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let alive = state.mapping_service.check_alive().await;
    Json(StatusResponse::from_alive(alive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MappingService, ValidationLimits};
    use crate::domain::repositories::MockMappingRepository;
    use crate::error::AppError;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn server_with(mock: MockMappingRepository) -> TestServer {
        let service = MappingService::new(Arc::new(mock), ValidationLimits::default());
        let app = Router::new()
            .route("/ping", get(ping_handler))
            .route("/status", get(status_handler))
            .with_state(AppState::new(Arc::new(service)));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let server = server_with(MockMappingRepository::new());

        let response = server.get("/ping").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "ping": "pong" }));
    }

    #[tokio::test]
    async fn test_status_db_up() {
        let mut mock = MockMappingRepository::new();
        mock.expect_ping().returning(|| Ok(1));
        let server = server_with(mock);

        let response = server.get("/status").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "db_up": "true" }));
    }

    #[tokio::test]
    async fn test_status_db_down() {
        let mut mock = MockMappingRepository::new();
        mock.expect_ping()
            .returning(|| Err(AppError::internal("Database error: connection refused")));
        let server = server_with(mock);

        let response = server.get("/status").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "db_up": "false" }));
    }
}
