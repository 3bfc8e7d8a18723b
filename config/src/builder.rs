//! Validating builder for [`EnvironmentConfig`].

use crate::{error::Result, Auth0Config, ConfigurationError, EnvironmentConfig, Field, HttpUrl};

/// Collects field values and validates them into an [`EnvironmentConfig`].
///
/// Fields are checked in persisted-shape order, so the first offending
/// field is the one reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBuilder {
    production: Option<bool>,
    api_server_url: Option<String>,
    auth0_domain: Option<String>,
    auth0_audience: Option<String>,
    auth0_client_id: Option<String>,
    auth0_callback_url: Option<String>,
}

impl EnvironmentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn production(mut self, production: bool) -> Self {
        self.production = Some(production);
        self
    }

    pub fn api_server_url(mut self, url: impl Into<String>) -> Self {
        self.api_server_url = Some(url.into());
        self
    }

    pub fn auth0_domain(mut self, domain: impl Into<String>) -> Self {
        self.auth0_domain = Some(domain.into());
        self
    }

    pub fn auth0_audience(mut self, audience: impl Into<String>) -> Self {
        self.auth0_audience = Some(audience.into());
        self
    }

    pub fn auth0_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.auth0_client_id = Some(client_id.into());
        self
    }

    pub fn auth0_callback_url(mut self, url: impl Into<String>) -> Self {
        self.auth0_callback_url = Some(url.into());
        self
    }

    /// Validate the collected values and produce the record.
    pub fn build(self) -> Result<EnvironmentConfig> {
        let production = self.production.ok_or(ConfigurationError::MissingField {
            field: Field::Production,
        })?;
        let api_server_url = required_url(Field::ApiServerUrl, self.api_server_url)?;
        let domain = required_url(Field::Auth0Domain, self.auth0_domain)?;
        let audience = required_text(Field::Auth0Audience, self.auth0_audience)?;
        let client_id = required_text(Field::Auth0ClientId, self.auth0_client_id)?;
        let callback_url = required_url(Field::Auth0CallbackUrl, self.auth0_callback_url)?;

        Ok(EnvironmentConfig {
            production,
            api_server_url,
            auth0: Auth0Config {
                domain,
                audience,
                client_id,
                callback_url,
            },
        })
    }
}

impl From<&EnvironmentConfig> for EnvironmentBuilder {
    fn from(config: &EnvironmentConfig) -> Self {
        let auth0 = config.auth0();
        Self {
            production: Some(config.production()),
            api_server_url: Some(config.api_server_url().as_str().to_string()),
            auth0_domain: Some(auth0.domain().as_str().to_string()),
            auth0_audience: Some(auth0.audience().to_string()),
            auth0_client_id: Some(auth0.client_id().to_string()),
            auth0_callback_url: Some(auth0.callback_url().as_str().to_string()),
        }
    }
}

fn required_text(field: Field, value: Option<String>) -> Result<String> {
    let value = value.ok_or(ConfigurationError::MissingField { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigurationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn required_url(field: Field, value: Option<String>) -> Result<HttpUrl> {
    let value = value.ok_or(ConfigurationError::MissingField { field })?;
    HttpUrl::parse(field, value)
}
