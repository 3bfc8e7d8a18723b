//! HTTP route definitions.

mod environment;
mod health;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(environment::routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use brew_config::{ActiveEnvironment, EnvironmentConfig, EnvironmentSource, Profile};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(environment: ActiveEnvironment) -> AppState {
        AppState { environment }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = create_routes()
            .with_state(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn serves_active_environment_unchanged() {
        let document = json!({
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "auth0": {
                "domain": "https://example.us",
                "audience": "app",
                "clientId": "abc123",
                "callbackUrl": "http://localhost:8100"
            }
        });
        let config = EnvironmentConfig::from_value(document.clone()).unwrap();
        let state = test_state(ActiveEnvironment::new(Profile::Development, config));

        let (status, body) = get(state, "/environment").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, document);
    }

    #[tokio::test]
    async fn serves_named_profile() {
        let state = test_state(ActiveEnvironment::from_profile(Profile::Development).unwrap());

        let (status, body) = get(state, "/environment/prod").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["production"], json!(true));

        let expected = Profile::Production.config().unwrap();
        assert_eq!(EnvironmentConfig::from_value(body).unwrap(), expected);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let state = test_state(ActiveEnvironment::for_build().unwrap());

        let (status, body) = get(state, "/environment/staging").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], json!("unknown profile: staging"));
    }

    #[tokio::test]
    async fn health_reports_profile() {
        let state = test_state(ActiveEnvironment::from_profile(Profile::Production).unwrap());

        let (status, body) = get(state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["profile"], json!("production"));
        assert_eq!(body["source"], json!("profile:production"));
    }

    #[tokio::test]
    async fn health_reports_document_source() {
        let config = Profile::Development.config().unwrap();
        let source = EnvironmentSource::Document("/etc/brew/env.json".into());
        let state = test_state(ActiveEnvironment::new(source, config));

        let (status, body) = get(state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], Value::Null);
        assert_eq!(body["source"], json!("document:/etc/brew/env.json"));
    }
}
