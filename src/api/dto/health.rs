//! DTOs for liveness and status endpoints.

use serde::Serialize;

/// Response of `GET /ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ping: &'static str,
}

/// Response of `GET /status`.
///
/// `db_up` is the string `"true"` or `"false"`, not a JSON boolean.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub db_up: &'static str,
}

impl StatusResponse {
    pub fn from_alive(alive: bool) -> Self {
        Self {
            db_up: if alive { "true" } else { "false" },
        }
    }
}
