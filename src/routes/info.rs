//! Environment metadata endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Greeting included in every response.
pub const MESSAGE: &str = "Hello from GitOps!";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub environment: String,
    pub version: String,
}

/// GET / — environment and version metadata.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: MESSAGE,
        environment: state.environment,
        version: state.version,
    })
}
