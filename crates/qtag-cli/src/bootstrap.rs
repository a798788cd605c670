use std::io::IsTerminal;

use anyhow::Context;
use qtag_config::QtagConfig;

use crate::commands::auth::login;

/// Load layered configuration and fill in the stored password.
pub fn load_config() -> anyhow::Result<QtagConfig> {
    let mut config = QtagConfig::load_with_dotenv().context("failed to load qtag configuration")?;

    if config.credentials.password.is_empty()
        && !config.credentials.username.is_empty()
        && let Some(password) = qtag_auth::resolve_password(&config.credentials.username)
    {
        config.credentials.password = password;
    }

    Ok(config)
}

/// Make sure endpoint and credentials are present before talking to the API.
///
/// On an interactive terminal a missing value starts the first-run prompt;
/// otherwise the command fails with a hint.
pub fn ensure_configured(config: QtagConfig) -> anyhow::Result<QtagConfig> {
    if config.is_complete() {
        return Ok(config);
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "qtag is not configured: run `qtag auth login` or set QTAG_API__URL, \
             QTAG_CREDENTIALS__USERNAME and QTAG_CREDENTIALS__PASSWORD"
        );
    }

    eprintln!("qtag is not configured yet, let's set it up.");
    let (config, _) = login::interactive_setup(config, None, None)?;
    Ok(config)
}
