//! Asset management API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default `X-Requested-With` header value.
pub const DEFAULT_CLIENT_NAME: &str = "qtag-cli";

const fn default_timeout_secs() -> u64 {
    60
}

fn default_client_name() -> String {
    DEFAULT_CLIENT_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the platform, e.g. `https://qualysapi.qg2.apps.qualys.com`.
    #[serde(default)]
    pub url: String,

    /// Value sent in the `X-Requested-With` header.
    #[serde(default = "default_client_name")]
    pub client_name: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            client_name: default_client_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Reject values the transport cannot work with. An empty URL is allowed
    /// here; it only means first-run setup has not happened yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.url".into(),
                reason: format!("'{url}' must start with https:// or http://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
