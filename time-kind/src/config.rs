use dotenvy::dotenv;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::zone::LocalZone;

/// Where the local timezone comes from.
///
/// Read from `LOCAL_TIMEZONE`; unset means the host's zone.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TimeZoneConfig {
    #[serde(default)]
    local_timezone: Option<String>,
}

impl TimeZoneConfig {
    pub fn new(local_timezone: impl Into<String>) -> Self {
        Self {
            local_timezone: Some(local_timezone.into()),
        }
    }

    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv() {
            tracing::trace!("no .env file loaded: {e}");
        }
        Ok(envy::from_env::<Self>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    pub fn local_timezone(&self) -> Option<&str> {
        self.local_timezone.as_deref()
    }

    pub fn zone(&self) -> Result<LocalZone, ConfigError> {
        self.local_timezone
            .as_deref()
            .map_or(Ok(LocalZone::System), str::parse)
    }
}
