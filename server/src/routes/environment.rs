//! Environment record endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use brew_config::{EnvironmentConfig, Profile};

use crate::error::{AppError, Result};
use crate::AppState;

/// Create environment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/environment", get(active_handler))
        .route("/environment/{profile}", get(profile_handler))
}

/// GET /environment - The record this server was started with.
async fn active_handler(State(state): State<AppState>) -> Json<EnvironmentConfig> {
    Json(state.environment.get().as_ref().clone())
}

/// GET /environment/{profile} - The built-in record of a named profile.
async fn profile_handler(Path(name): Path<String>) -> Result<Json<EnvironmentConfig>> {
    let profile: Profile = name
        .parse()
        .map_err(|_| AppError::NotFound(format!("unknown profile: {name}")))?;

    Ok(Json(profile.config()?))
}
