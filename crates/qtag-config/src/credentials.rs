//! Platform login credentials.
//!
//! Only `username` is written to the config file. The password normally lives
//! in the OS keychain (see `qtag-auth`) and reaches this struct at startup, or
//! comes from `QTAG_CREDENTIALS__PASSWORD`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .finish()
    }
}

impl CredentialsConfig {
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!CredentialsConfig::default().is_configured());
    }

    #[test]
    fn not_configured_without_password() {
        let config = CredentialsConfig {
            username: "ops_user".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn debug_masks_password() {
        let config = CredentialsConfig {
            username: "ops_user".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("ops_user"));
        assert!(!rendered.contains("hunter2"));
    }
}
