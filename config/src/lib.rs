//! # Brew Config
//!
//! Typed environment configuration for the Brew client.
//!
//! The environment record names the backend API the client talks to and the
//! Auth0 tenant it authenticates against. It is validated once, when it is
//! built, and is read-only from then on.
//!
//! ## Design Principles
//!
//! - **No IO**: Reading files or process environment is the caller's job
//! - **Valid or absent**: Every way of constructing a record validates it
//! - **Immutable**: No setters; deriving a variant produces a new record
//! - **Explicit selection**: Profiles are an enum, chosen by the build or
//!   by the caller, never by swapping files
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_config::{ActiveEnvironment, EnvironmentConfig, Profile};
//!
//! // Built-in profile
//! let active = ActiveEnvironment::from_profile(Profile::Development).unwrap();
//! assert!(!active.get().production());
//!
//! // From a JSON document
//! let config = EnvironmentConfig::from_json(r#"{
//!     "production": false,
//!     "apiServerUrl": "http://127.0.0.1:5000",
//!     "auth0": {
//!         "domain": "https://example.us",
//!         "audience": "app",
//!         "clientId": "abc123",
//!         "callbackUrl": "http://localhost:8100"
//!     }
//! }"#).unwrap();
//! assert_eq!(config.auth0().client_id(), "abc123");
//!
//! // Deriving a variant leaves the original untouched
//! let staged = config.to_builder().production(true).build().unwrap();
//! assert!(staged.production());
//! assert!(!config.production());
//! ```

pub mod active;
pub mod builder;
pub mod document;
pub mod environment;
pub mod error;
pub mod profile;

// Re-export main types at crate root
pub use active::{ActiveEnvironment, EnvironmentSource};
pub use builder::EnvironmentBuilder;
pub use document::ENVIRONMENT_FORMAT_VERSION;
pub use environment::{Auth0Config, EnvironmentConfig, HttpUrl};
pub use error::{ConfigurationError, Field};
pub use profile::Profile;
