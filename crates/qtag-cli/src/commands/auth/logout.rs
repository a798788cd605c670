use qtag_config::QtagConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    username: String,
}

pub fn handle(flags: &GlobalFlags, config: &QtagConfig) -> anyhow::Result<()> {
    let username = &config.credentials.username;
    qtag_auth::logout(username)?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            username: username.clone(),
        },
        flags.format,
    )
}
