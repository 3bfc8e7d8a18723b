//! The resolved environment handed to the rest of an application.

use crate::{error::Result, EnvironmentConfig, Profile};
use std::{fmt, sync::Arc};

/// Where the active record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// The built-in record of a profile.
    Profile(Profile),
    /// A JSON document, labelled by where it was read from.
    Document(String),
}

impl From<Profile> for EnvironmentSource {
    fn from(profile: Profile) -> Self {
        EnvironmentSource::Profile(profile)
    }
}

impl fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSource::Profile(profile) => write!(f, "profile:{profile}"),
            EnvironmentSource::Document(label) => write!(f, "document:{label}"),
        }
    }
}

/// The single active environment record of a process.
///
/// Resolve it once at startup and pass it to whatever needs it. Clones share
/// the same record, and there is no way to change it afterwards, so readers
/// on any thread need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEnvironment {
    source: EnvironmentSource,
    config: Arc<EnvironmentConfig>,
}

impl ActiveEnvironment {
    /// Wrap an already validated record.
    pub fn new(source: impl Into<EnvironmentSource>, config: EnvironmentConfig) -> Self {
        Self {
            source: source.into(),
            config: Arc::new(config),
        }
    }

    /// Resolve the built-in record of a profile.
    pub fn from_profile(profile: Profile) -> Result<Self> {
        Ok(Self::new(profile, profile.config()?))
    }

    /// Resolve the profile selected by this build.
    pub fn for_build() -> Result<Self> {
        Self::from_profile(Profile::BUILD)
    }

    /// The active configuration.
    pub fn get(&self) -> Arc<EnvironmentConfig> {
        Arc::clone(&self.config)
    }

    /// Where the record came from.
    pub fn source(&self) -> &EnvironmentSource {
        &self.source
    }

    /// The profile whose built-in record is active, if the record did not
    /// come from a document.
    pub fn profile(&self) -> Option<Profile> {
        match self.source {
            EnvironmentSource::Profile(profile) => Some(profile),
            EnvironmentSource::Document(_) => None,
        }
    }
}
