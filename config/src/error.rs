//! Error types for environment configuration.

use std::fmt;
use thiserror::Error;

/// A field of the environment record, named by its path in the persisted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Production,
    ApiServerUrl,
    Auth0Domain,
    Auth0Audience,
    Auth0ClientId,
    Auth0CallbackUrl,
}

impl Field {
    /// All fields, in persisted-shape order.
    pub const ALL: [Field; 6] = [
        Field::Production,
        Field::ApiServerUrl,
        Field::Auth0Domain,
        Field::Auth0Audience,
        Field::Auth0ClientId,
        Field::Auth0CallbackUrl,
    ];

    /// Dotted path of the field, e.g. `auth0.clientId`.
    pub fn path(self) -> &'static str {
        match self {
            Field::Production => "production",
            Field::ApiServerUrl => "apiServerUrl",
            Field::Auth0Domain => "auth0.domain",
            Field::Auth0Audience => "auth0.audience",
            Field::Auth0ClientId => "auth0.clientId",
            Field::Auth0CallbackUrl => "auth0.callbackUrl",
        }
    }

    /// Last path segment, e.g. `clientId`.
    pub fn name(self) -> &'static str {
        let path = self.path();
        path.rsplit('.').next().unwrap_or(path)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// All possible errors from building or loading an environment record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    // Field errors
    #[error("missing required field: {field}")]
    MissingField { field: Field },

    #[error("field must not be empty: {field}")]
    EmptyField { field: Field },

    #[error("invalid url for field '{field}': {reason}")]
    InvalidUrl { field: Field, reason: String },

    #[error("unsupported url scheme for field '{field}': {scheme} (expected http or https)")]
    UnsupportedScheme { field: Field, scheme: String },

    // Selection errors
    #[error("unknown environment profile: {0}")]
    UnknownProfile(String),

    // Document errors
    #[error("invalid environment document: {0}")]
    InvalidDocument(String),

    #[error("unsupported environment format version: {found} (supported: 1 to {supported})")]
    UnsupportedFormatVersion { found: u32, supported: u32 },
}

impl ConfigurationError {
    /// The field this error is about, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ConfigurationError::MissingField { field }
            | ConfigurationError::EmptyField { field }
            | ConfigurationError::InvalidUrl { field, .. }
            | ConfigurationError::UnsupportedScheme { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
