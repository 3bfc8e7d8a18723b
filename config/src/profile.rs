//! Named environment profiles.
//!
//! Each profile carries a built-in record. The profile a binary starts with
//! by default is fixed at build time through the `production` Cargo feature.

use crate::{error::Result, ConfigurationError, EnvironmentConfig};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A named deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
}

/// Field values of a built-in profile.
struct Preset {
    production: bool,
    api_server_url: &'static str,
    auth0_domain: &'static str,
    auth0_audience: &'static str,
    auth0_client_id: &'static str,
    auth0_callback_url: &'static str,
}

const DEVELOPMENT: Preset = Preset {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    auth0_domain: "https://coffeeappmudather.us",
    auth0_audience: "coffee%20app",
    auth0_client_id: "nc1Z3uNNF1X9GZFPjaWU3RksuGgTv1R3",
    auth0_callback_url: "http://localhost:8100",
};

const PRODUCTION: Preset = Preset {
    production: true,
    api_server_url: "https://api.coffeeappmudather.us",
    auth0_domain: "https://coffeeappmudather.us",
    auth0_audience: "coffee%20app",
    auth0_client_id: "nc1Z3uNNF1X9GZFPjaWU3RksuGgTv1R3",
    auth0_callback_url: "https://app.coffeeappmudather.us",
};

impl Profile {
    /// Every profile, in declaration order.
    pub const ALL: [Profile; 2] = [Profile::Development, Profile::Production];

    /// The profile selected by this build.
    #[cfg(feature = "production")]
    pub const BUILD: Profile = Profile::Production;

    /// The profile selected by this build.
    #[cfg(not(feature = "production"))]
    pub const BUILD: Profile = Profile::Development;

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Build the built-in record for this profile.
    pub fn config(self) -> Result<EnvironmentConfig> {
        let preset = match self {
            Profile::Development => &DEVELOPMENT,
            Profile::Production => &PRODUCTION,
        };

        EnvironmentConfig::builder()
            .production(preset.production)
            .api_server_url(preset.api_server_url)
            .auth0_domain(preset.auth0_domain)
            .auth0_audience(preset.auth0_audience)
            .auth0_client_id(preset.auth0_client_id)
            .auth0_callback_url(preset.auth0_callback_url)
            .build()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::BUILD
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(ConfigurationError::UnknownProfile(s.to_string())),
        }
    }
}
