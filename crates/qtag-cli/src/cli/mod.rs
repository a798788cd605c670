use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qtag` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qtag",
    version,
    about = "qtag - tag and rename host assets on the asset management API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::AuthCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_is_default_format() {
        let cli = Cli::try_parse_from(["qtag", "searchTags", "--tagName", "DMZ"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn add_tag_uses_camel_case_flags() {
        let cli = Cli::try_parse_from(["qtag", "addTag", "--tagName", "DMZ", "--hostName", "WEB01"])
            .expect("cli should parse");

        match cli.command {
            Commands::AddTag(args) => {
                assert_eq!(args.tag_name, "DMZ");
                assert_eq!(args.host_name, "WEB01");
            }
            other => panic!("expected addTag, got {other:?}"),
        }
    }

    #[test]
    fn remove_tag_requires_both_flags() {
        let parsed = Cli::try_parse_from(["qtag", "removeTag", "--tagName", "DMZ"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn bulk_commands_keep_kebab_case_names() {
        let cli = Cli::try_parse_from([
            "qtag",
            "add-tag-to-hosts",
            "--tagToAdd",
            "DMZ",
            "--hostIds",
            "1,2,3",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::AddTagToHosts(args) => {
                assert_eq!(args.tag_to_add.as_deref(), Some("DMZ"));
                assert_eq!(args.host_ids.as_deref(), Some("1,2,3"));
            }
            other => panic!("expected add-tag-to-hosts, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["qtag", "update-hosts-with-domain", "--hostName", "web"])
            .expect("missing --tagName is reported by the workflow");
        assert!(matches!(
            cli.command,
            Commands::UpdateHostsWithDomain(ref args) if args.tag_name.is_none()
        ));
    }

    #[test]
    fn asset_list_tag_filter_is_optional() {
        let cli = Cli::try_parse_from(["qtag", "getAssetList", "--hostName", "WEB"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::GetAssetList(ref args) if args.tag_name.is_none()
        ));
    }

    #[test]
    fn get_host_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["qtag", "getHost", "--id", "abc"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let error = Cli::try_parse_from(["qtag", "deleteHost"]).unwrap_err();
        assert!(error.to_string().contains("deleteHost"));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["qtag", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["qtag", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }
}
