//! # qtag-config
//!
//! Layered configuration loading for qtag using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QTAG_*` prefix, `__` as separator)
//! 2. Project-level `.qtag/config.toml`
//! 3. User-level `~/.config/qtag/config.toml` (written on first run)
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QTAG_API__URL` -> `api.url`, `QTAG_CREDENTIALS__USERNAME` ->
//! `credentials.username`, `QTAG_GENERAL__MATCH_POLICY` -> `general.match_policy`.
//!
//! # Usage
//!
//! ```no_run
//! use qtag_config::QtagConfig;
//!
//! let config = QtagConfig::load_with_dotenv().expect("config");
//! if !config.api.is_configured() {
//!     eprintln!("run `qtag auth login` first");
//! }
//! ```

mod api;
mod credentials;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_CLIENT_NAME};
pub use credentials::CredentialsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QtagConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QtagConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type, and [`ConfigError::InvalidValue`] for an unusable
    /// endpoint setting.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            tracing::warn!(%error, "failed to load .env");
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".qtag/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QTAG_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qtag").join("config.toml"))
    }

    /// Whether endpoint and credentials are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.api.is_configured() && self.credentials.is_configured()
    }

    /// Write the persistable part of this configuration to the user-global
    /// config file and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when no config directory exists
    /// for this user, or any error from [`Self::save_to`].
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write this configuration as TOML to `path`, creating parent
    /// directories. The password is never written. On Unix the file is
    /// restricted to mode 0600.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] on filesystem failures and
    /// [`ConfigError::Serialize`] if the TOML cannot be rendered.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let rendered = toml::to_string_pretty(self)?;
        fs::write(path, rendered).map_err(io_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(io_err)?;
        }

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }
}
