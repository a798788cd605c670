use qtag_config::QtagConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    configured: bool,
    api_url: Option<String>,
    username: Option<String>,
    password_source: Option<&'static str>,
    match_policy: String,
    config_path: Option<String>,
}

pub fn handle(flags: &GlobalFlags, config: &QtagConfig) -> anyhow::Result<()> {
    let username = &config.credentials.username;

    let password_source = if std::env::var_os("QTAG_CREDENTIALS__PASSWORD").is_some() {
        Some("env")
    } else {
        qtag_auth::credential_store::detect_source(username)
            .map(qtag_auth::CredentialSource::as_str)
    };

    let status = AuthStatusResponse {
        configured: config.is_complete(),
        api_url: non_empty(&config.api.url),
        username: non_empty(username),
        password_source,
        match_policy: config.general.match_policy.to_string(),
        config_path: QtagConfig::global_config_path().map(|path| path.display().to_string()),
    };

    output(&status, flags.format)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
