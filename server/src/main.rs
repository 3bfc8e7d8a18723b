//! Brew Environment Server - Serves the active environment record.
//!
//! The record is resolved and validated once at startup. A broken record
//! stops the server before it binds, so clients never see a half-valid
//! configuration.

mod config;
mod error;
mod routes;

use crate::config::Config;
use axum::Router;
use brew_config::ActiveEnvironment;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub environment: ActiveEnvironment,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brew_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Resolve the environment record before accepting any request
    let environment = config
        .resolve_environment()
        .inspect_err(|e| tracing::error!("Refusing to start: {}", e))?;
    let active = environment.get();
    tracing::info!(
        source = %environment.source(),
        production = active.production(),
        api_server_url = %active.api_server_url(),
        auth0_domain = %active.auth0().domain(),
        "Environment resolved"
    );
    if let Some(path) = &config.environment_file {
        tracing::info!("Loaded environment file {}", path.display());
    }
    if !config.overrides.is_empty() {
        tracing::debug!("Applied environment overrides from BREW_* variables");
    }

    tracing::info!("Starting Brew Environment Server on {}:{}", config.host, config.port);

    // Build application state
    let state = AppState { environment };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
