//! Behavioural tests for brew-config
//!
//! These cover the guarantees callers rely on: every profile is complete,
//! records survive the persisted shape unchanged, and broken documents are
//! rejected with the offending field named.

use brew_config::{ActiveEnvironment, ConfigurationError, EnvironmentConfig, Field, Profile};
use proptest::prelude::*;
use serde_json::json;

fn boundary_document() -> serde_json::Value {
    json!({
        "production": false,
        "apiServerUrl": "http://127.0.0.1:5000",
        "auth0": {
            "domain": "https://example.us",
            "audience": "app",
            "clientId": "abc123",
            "callbackUrl": "http://localhost:8100"
        }
    })
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn every_profile_is_complete() {
    for profile in Profile::ALL {
        let active = ActiveEnvironment::from_profile(profile).unwrap();
        let config = active.get();

        assert_eq!(config.production(), profile == Profile::Production);
        for url in [
            config.api_server_url(),
            config.auth0().domain(),
            config.auth0().callback_url(),
        ] {
            assert!(!url.as_str().is_empty());
            assert!(url.as_url().has_host(), "no host in {}", url);
        }
        assert!(!config.auth0().audience().is_empty());
        assert!(!config.auth0().client_id().is_empty());
    }
}

#[test]
fn get_returns_equal_values() {
    let active = ActiveEnvironment::for_build().unwrap();
    assert_eq!(*active.get(), *active.get());
    assert_eq!(active.profile(), Some(Profile::BUILD));
}

// ============================================================================
// Persisted shape
// ============================================================================

#[test]
fn boundary_values_are_returned_unchanged() {
    let config = EnvironmentConfig::from_value(boundary_document()).unwrap();
    let active = ActiveEnvironment::new(Profile::Development, config);
    let config = active.get();

    assert!(!config.production());
    assert_eq!(config.api_server_url().as_str(), "http://127.0.0.1:5000");
    assert_eq!(config.auth0().domain().as_str(), "https://example.us");
    assert_eq!(config.auth0().audience(), "app");
    assert_eq!(config.auth0().client_id(), "abc123");
    assert_eq!(config.auth0().callback_url().as_str(), "http://localhost:8100");
}

#[test]
fn profiles_round_trip_through_json() {
    for profile in Profile::ALL {
        let config = profile.config().unwrap();
        let parsed = EnvironmentConfig::from_json(&config.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}

#[test]
fn missing_client_id_is_named() {
    let mut doc = boundary_document();
    doc["auth0"].as_object_mut().unwrap().remove("clientId");

    let err = EnvironmentConfig::from_value(doc).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MissingField {
            field: Field::Auth0ClientId
        }
    );
    assert_eq!(err.field().map(Field::name), Some("clientId"));
}

#[test]
fn each_missing_field_is_named() {
    for field in Field::ALL {
        let mut doc = boundary_document();
        match field.path().split_once('.') {
            Some((outer, key)) => doc[outer].as_object_mut().unwrap().remove(key),
            None => doc.as_object_mut().unwrap().remove(field.path()),
        };

        let err = EnvironmentConfig::from_value(doc).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingField { field });
    }
}

#[test]
fn empty_strings_are_rejected() {
    let mut doc = boundary_document();
    doc["auth0"]["audience"] = json!("");

    let err = EnvironmentConfig::from_value(doc).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::EmptyField {
            field: Field::Auth0Audience
        }
    );
}

#[test]
fn relative_callback_is_rejected() {
    let mut doc = boundary_document();
    doc["auth0"]["callbackUrl"] = json!("localhost:8100");

    let err = EnvironmentConfig::from_value(doc).unwrap_err();
    assert_eq!(err.field(), Some(Field::Auth0CallbackUrl));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut doc = boundary_document();
    doc["featureFlags"] = json!({"beta": true});
    assert!(EnvironmentConfig::from_value(doc).is_ok());
}

// ============================================================================
// Properties
// ============================================================================

fn http_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https")],
        "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,5}){0,2}",
        proptest::option::of(1024u16..65535),
    )
        .prop_map(|(scheme, host, port)| match port {
            Some(port) => format!("{scheme}://{host}:{port}"),
            None => format!("{scheme}://{host}"),
        })
}

proptest! {
    #[test]
    fn json_round_trip(
        production in any::<bool>(),
        api in http_url(),
        domain in http_url(),
        audience in "[A-Za-z0-9%_-]{1,24}",
        client_id in "[A-Za-z0-9]{1,32}",
        callback in http_url(),
    ) {
        let config = EnvironmentConfig::builder()
            .production(production)
            .api_server_url(api.clone())
            .auth0_domain(domain)
            .auth0_audience(audience)
            .auth0_client_id(client_id)
            .auth0_callback_url(callback)
            .build()
            .unwrap();

        let parsed = EnvironmentConfig::from_json(&config.to_json().unwrap()).unwrap();
        prop_assert_eq!(&parsed, &config);
        prop_assert_eq!(parsed.api_server_url().as_str(), api.as_str());
    }
}
