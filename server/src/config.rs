//! Configuration management for the server.

use brew_config::{
    ActiveEnvironment, ConfigurationError, EnvironmentBuilder, EnvironmentConfig,
    EnvironmentSource, Profile,
};
use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Profile whose record is served
    pub profile: Profile,
    /// JSON document replacing the profile's built-in record
    pub environment_file: Option<PathBuf>,
    /// Per-field overrides applied on top of the record
    pub overrides: Overrides,
}

/// Per-field overrides of the environment record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub production: Option<bool>,
    pub api_server_url: Option<String>,
    pub auth0_domain: Option<String>,
    pub auth0_audience: Option<String>,
    pub auth0_client_id: Option<String>,
    pub auth0_callback_url: Option<String>,
}

impl Overrides {
    fn apply(&self, mut builder: EnvironmentBuilder) -> EnvironmentBuilder {
        if let Some(production) = self.production {
            builder = builder.production(production);
        }
        if let Some(ref url) = self.api_server_url {
            builder = builder.api_server_url(url.clone());
        }
        if let Some(ref domain) = self.auth0_domain {
            builder = builder.auth0_domain(domain.clone());
        }
        if let Some(ref audience) = self.auth0_audience {
            builder = builder.auth0_audience(audience.clone());
        }
        if let Some(ref client_id) = self.auth0_client_id {
            builder = builder.auth0_client_id(client_id.clone());
        }
        if let Some(ref url) = self.auth0_callback_url {
            builder = builder.auth0_callback_url(url.clone());
        }
        builder
    }

    /// Whether any override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let profile = match lookup("BREW_PROFILE") {
            Some(name) => name.parse()?,
            None => Profile::BUILD,
        };

        let environment_file = lookup("BREW_ENVIRONMENT_FILE").map(PathBuf::from);

        let production = lookup("BREW_PRODUCTION")
            .map(|value| parse_bool("BREW_PRODUCTION", &value))
            .transpose()?;

        let overrides = Overrides {
            production,
            api_server_url: lookup("BREW_API_SERVER_URL"),
            auth0_domain: lookup("BREW_AUTH0_DOMAIN"),
            auth0_audience: lookup("BREW_AUTH0_AUDIENCE"),
            auth0_client_id: lookup("BREW_AUTH0_CLIENT_ID"),
            auth0_callback_url: lookup("BREW_AUTH0_CALLBACK_URL"),
        };

        Ok(Self {
            host,
            port,
            profile,
            environment_file,
            overrides,
        })
    }

    /// Resolve and validate the environment record to serve.
    ///
    /// The profile's built-in record is the base, replaced by the
    /// environment file when one is configured; overrides apply last. A
    /// record read from a file is labelled with the file, not the profile.
    pub fn resolve_environment(&self) -> Result<ActiveEnvironment, ConfigError> {
        let (source, base) = match &self.environment_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::EnvironmentFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                let source = EnvironmentSource::Document(path.display().to_string());
                (source, EnvironmentConfig::from_json(&text)?)
            }
            None => (EnvironmentSource::Profile(self.profile), self.profile.config()?),
        };

        let config = self.overrides.apply(base.to_builder()).build()?;
        Ok(ActiveEnvironment::new(source, config))
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },

    #[error("Cannot read environment file {}: {source}", path.display())]
    EnvironmentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid environment: {0}")]
    Environment(#[from] ConfigurationError),
}
