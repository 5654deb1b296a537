#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use shortener::application::services::{MappingService, ValidationLimits};
use shortener::infrastructure::persistence::InMemoryMappingRepository;
use shortener::routes::app_router;
use shortener::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let service = MappingService::new(repository, ValidationLimits::default());

    AppState::new(Arc::new(service))
}

/// Test server over the full router backed by an in-memory store.
pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub async fn create_mapping(server: &TestServer, key: &str, target: &str) {
    server
        .post("/urls/")
        .json(&json!({ "short_url": key, "target_url": target }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
