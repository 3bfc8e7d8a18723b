//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use brew_config::Profile;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
    pub profile: Option<Profile>,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.environment.source().to_string(),
        profile: state.environment.profile(),
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Brew Environment Server"
}
