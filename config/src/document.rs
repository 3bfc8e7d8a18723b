//! JSON document form of the environment record.
//!
//! Writers always emit the plain persisted shape. Readers additionally
//! accept an optional top-level `formatVersion` and the key spellings used
//! by the original frontend environment file (`auth0.url`,
//! `auth0.callbackURL`).

use crate::{error::Result, ConfigurationError, EnvironmentBuilder, EnvironmentConfig};
use serde::Deserialize;

/// Highest document format version this crate understands.
pub const ENVIRONMENT_FORMAT_VERSION: u32 = 1;

/// Unvalidated document as read off the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvironment {
    format_version: Option<u32>,
    production: Option<bool>,
    api_server_url: Option<String>,
    auth0: Option<RawAuth0>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuth0 {
    #[serde(alias = "url")]
    domain: Option<String>,
    audience: Option<String>,
    client_id: Option<String>,
    #[serde(alias = "callbackURL")]
    callback_url: Option<String>,
}

impl TryFrom<RawEnvironment> for EnvironmentConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawEnvironment) -> Result<Self> {
        let version = raw.format_version.unwrap_or(ENVIRONMENT_FORMAT_VERSION);
        if !(1..=ENVIRONMENT_FORMAT_VERSION).contains(&version) {
            return Err(ConfigurationError::UnsupportedFormatVersion {
                found: version,
                supported: ENVIRONMENT_FORMAT_VERSION,
            });
        }

        let auth0 = raw.auth0.unwrap_or_default();
        let mut builder = EnvironmentBuilder::new();
        if let Some(production) = raw.production {
            builder = builder.production(production);
        }
        if let Some(url) = raw.api_server_url {
            builder = builder.api_server_url(url);
        }
        if let Some(domain) = auth0.domain {
            builder = builder.auth0_domain(domain);
        }
        if let Some(audience) = auth0.audience {
            builder = builder.auth0_audience(audience);
        }
        if let Some(client_id) = auth0.client_id {
            builder = builder.auth0_client_id(client_id);
        }
        if let Some(url) = auth0.callback_url {
            builder = builder.auth0_callback_url(url);
        }

        builder.build()
    }
}

impl EnvironmentConfig {
    /// Serialize to the persisted JSON shape.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ConfigurationError::InvalidDocument(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigurationError::InvalidDocument(e.to_string()))
    }

    /// Parse and validate a JSON document.
    ///
    /// Syntax and type errors surface as [`ConfigurationError::InvalidDocument`];
    /// field problems keep their precise variant.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawEnvironment = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidDocument(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Validate an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawEnvironment = serde_json::from_value(value)
            .map_err(|e| ConfigurationError::InvalidDocument(e.to_string()))?;
        Self::try_from(raw)
    }
}
