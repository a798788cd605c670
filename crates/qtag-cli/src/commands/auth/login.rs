use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use qtag_config::QtagConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    saved: bool,
    config_path: String,
    api_url: String,
    username: String,
    password_source: &'static str,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags, config: QtagConfig) -> anyhow::Result<()> {
    let (config, config_path) =
        interactive_setup(config, args.url.as_deref(), args.username.as_deref())?;

    let password_source = qtag_auth::credential_store::detect_source(&config.credentials.username)
        .map_or("none", qtag_auth::CredentialSource::as_str);

    output(
        &AuthLoginResponse {
            saved: true,
            config_path: config_path.display().to_string(),
            api_url: config.api.url,
            username: config.credentials.username,
            password_source,
        },
        flags.format,
    )
}

/// Prompt for endpoint, username and password, persist them and return the
/// completed configuration with the path it was saved to.
///
/// Values passed as arguments skip their prompt. An empty answer keeps the
/// current value.
pub(crate) fn interactive_setup(
    mut config: QtagConfig,
    url: Option<&str>,
    username: Option<&str>,
) -> anyhow::Result<(QtagConfig, PathBuf)> {
    {
        let mut input = std::io::stdin().lock();
        config.api.url = match url {
            Some(url) => url.trim().to_string(),
            None => prompt(&mut input, "API URL", &config.api.url)?,
        };
        config.credentials.username = match username {
            Some(username) => username.trim().to_string(),
            None => prompt(&mut input, "Username", &config.credentials.username)?,
        };
    }

    eprint!("Password: ");
    std::io::stderr().flush().context("failed to flush prompt")?;
    let password = rpassword::read_password().context("failed to read password")?;
    if !password.is_empty() {
        config.credentials.password = password;
    }

    if !config.is_complete() {
        anyhow::bail!("API URL, username and password are all required");
    }
    config.api.validate()?;

    qtag_auth::credential_store::store(&config.credentials.username, &config.credentials.password)?;
    let path = config.save()?;
    tracing::info!(path = %path.display(), "configuration saved");

    Ok((config, path))
}

fn prompt(input: &mut impl BufRead, label: &str, current: &str) -> anyhow::Result<String> {
    if current.is_empty() {
        eprint!("{label}: ");
    } else {
        eprint!("{label} [{current}]: ");
    }
    std::io::stderr().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {label}"))?;
    Ok(answer_or_current(&line, current))
}

fn answer_or_current(line: &str, current: &str) -> String {
    let answer = line.trim();
    if answer.is_empty() {
        current.to_string()
    } else {
        answer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{answer_or_current, prompt};

    #[test]
    fn blank_answer_keeps_current_value() {
        assert_eq!(answer_or_current("\n", "ops_user"), "ops_user");
        assert_eq!(answer_or_current("  new_user \n", "ops_user"), "new_user");
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = "https://qualysapi.qualys.eu\nignored\n".as_bytes();
        let url = prompt(&mut input, "API URL", "").expect("prompt should read");
        assert_eq!(url, "https://qualysapi.qualys.eu");
    }

    #[test]
    fn prompt_at_eof_keeps_current() {
        let mut input = "".as_bytes();
        let url = prompt(&mut input, "API URL", "https://old").expect("prompt should read");
        assert_eq!(url, "https://old");
    }
}
