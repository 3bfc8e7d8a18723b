//! The environment record and its Auth0 section.
//!
//! Records are immutable once built: fields are private and only exposed
//! through borrowing accessors. To derive a variant of an existing record,
//! go through [`EnvironmentConfig::to_builder`], which produces a new record.

use crate::{error::Result, ConfigurationError, EnvironmentBuilder, Field};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use url::Url;

/// An absolute `http`/`https` URL that remembers the exact text it came from.
///
/// `as_str` returns the original text so that a record serializes back to
/// the values it was built from, while `as_url` exposes the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpUrl {
    raw: String,
    url: Url,
}

impl HttpUrl {
    /// Parse and validate a URL for the given field.
    pub fn parse(field: Field, raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(ConfigurationError::EmptyField { field });
        }

        let url = Url::parse(&raw).map_err(|e| ConfigurationError::InvalidUrl {
            field,
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self { raw, url }),
            other => Err(ConfigurationError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            }),
        }
    }

    /// The URL exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for HttpUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Auth0 tenant settings handed to the authentication module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Config {
    pub(crate) domain: HttpUrl,
    pub(crate) audience: String,
    pub(crate) client_id: String,
    pub(crate) callback_url: HttpUrl,
}

impl Auth0Config {
    /// Base URL of the identity-provider tenant.
    pub fn domain(&self) -> &HttpUrl {
        &self.domain
    }

    /// Identifier of the protected API that issued tokens are scoped to.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Public identifier of the registered client application.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Where the identity provider redirects after authentication.
    pub fn callback_url(&self) -> &HttpUrl {
        &self.callback_url
    }

    /// Expected `iss` claim of tokens issued by this tenant, e.g.
    /// `https://tenant.us/`.
    pub fn issuer(&self) -> String {
        format!("{}/", self.domain.as_url().origin().ascii_serialization())
    }

    /// Location of the tenant's JSON Web Key Set.
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer())
    }
}

/// The environment configuration record.
///
/// Serializes to, and deserializes from, the persisted shape:
///
/// ```text
/// {
///   "production": bool,
///   "apiServerUrl": string,
///   "auth0": { "domain", "audience", "clientId", "callbackUrl" }
/// }
/// ```
///
/// Deserialization always validates, so an invalid record cannot be
/// produced through serde.
///
/// Fields cannot be assigned from outside the crate:
///
/// ```compile_fail
/// let mut config = brew_config::Profile::Development.config().unwrap();
/// config.production = true;
/// ```
///
/// ```compile_fail
/// let mut config = brew_config::Profile::Development.config().unwrap();
/// config.auth0.client_id = String::from("other");
/// ```
///
/// A changed record has to go through the builder again:
///
/// ```
/// let config = brew_config::Profile::Development.config().unwrap();
/// let changed = config.to_builder().production(true).build().unwrap();
/// assert!(!config.production());
/// assert!(changed.production());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::document::RawEnvironment")]
pub struct EnvironmentConfig {
    pub(crate) production: bool,
    pub(crate) api_server_url: HttpUrl,
    pub(crate) auth0: Auth0Config,
}

impl EnvironmentConfig {
    /// Start building a record from scratch.
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Start building a new record pre-filled with this record's values.
    pub fn to_builder(&self) -> EnvironmentBuilder {
        EnvironmentBuilder::from(self)
    }

    /// Whether this is a production deployment.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Base URL of the backend API.
    pub fn api_server_url(&self) -> &HttpUrl {
        &self.api_server_url
    }

    /// Auth0 tenant settings.
    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Resolve a path against the API base URL.
    ///
    /// The base is treated as a directory, so `http://host/api` joined with
    /// `drinks` yields `http://host/api/drinks`. The result must stay under
    /// the base: absolute URLs and `..` segments that leave it are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.api_server_url.as_url().clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }

        let invalid = |reason: String| ConfigurationError::InvalidUrl {
            field: Field::ApiServerUrl,
            reason,
        };

        let joined = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;

        if joined.origin() != base.origin() || !joined.path().starts_with(base.path()) {
            return Err(invalid(format!("endpoint '{path}' escapes the API base url")));
        }
        Ok(joined)
    }
}
