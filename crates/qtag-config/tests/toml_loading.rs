//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use qtag_config::QtagConfig;
use qtag_core::MatchPolicy;

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(QtagConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("QTAG_").split("__"))
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "https://qualysapi.qg2.apps.qualys.com"
client_name = "ops-tagger"
timeout_secs = 15

[credentials]
username = "ops_user"
password = "from-file"

[general]
match_policy = "first"
"#,
        )?;

        let config: QtagConfig = layered("config.toml").extract()?;

        assert_eq!(config.api.url, "https://qualysapi.qg2.apps.qualys.com");
        assert_eq!(config.api.client_name, "ops-tagger");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.credentials.username, "ops_user");
        assert_eq!(config.credentials.password, "from-file");
        assert_eq!(config.general.match_policy, MatchPolicy::First);
        assert!(config.is_complete());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "https://qualysapi.qualys.eu"
"#,
        )?;

        let config: QtagConfig = layered("config.toml").extract()?;

        assert_eq!(config.api.url, "https://qualysapi.qualys.eu");
        assert_eq!(config.api.client_name, "qtag-cli");
        assert_eq!(config.api.timeout_secs, 60);
        assert_eq!(config.general.match_policy, MatchPolicy::Unique);
        assert!(!config.credentials.is_configured());
        Ok(())
    });
}

#[test]
fn invalid_match_policy_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
match_policy = "best-guess"
"#,
        )?;

        let result: Result<QtagConfig, _> = layered("config.toml").extract();
        assert!(result.is_err());
        Ok(())
    });
}
