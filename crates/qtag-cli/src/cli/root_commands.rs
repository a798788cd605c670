use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
///
/// Command and flag names follow the established `qtag` invocations, so
/// most are camelCase rather than clap's default kebab-case.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a tag to the host matching --hostName.
    #[command(name = "addTag")]
    AddTag(TagHostArgs),
    /// Remove a tag from the host matching --hostName.
    #[command(name = "removeTag")]
    RemoveTag(TagHostArgs),
    /// Rename the host matching --hostName to its upper-cased DNS name.
    #[command(name = "updateHostName")]
    UpdateHostName(HostNameArgs),
    /// List hosts whose name contains --hostName, optionally with a tag.
    #[command(name = "getAssetList")]
    GetAssetList(AssetListArgs),
    /// Rename every host matching --hostName and --tagName to its DNS name.
    #[command(name = "update-hosts-with-domain")]
    UpdateHostsWithDomain(DomainRenameArgs),
    /// Add one tag to a comma-separated list of host ids.
    #[command(name = "add-tag-to-hosts")]
    AddTagToHosts(BulkTagArgs),
    /// Show one host by id.
    #[command(name = "getHost")]
    GetHost(GetHostArgs),
    /// List tags whose name contains --tagName.
    #[command(name = "searchTags")]
    SearchTags(SearchTagsArgs),
    /// Manage the stored endpoint and credentials.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TagHostArgs {
    /// Tag name to search for.
    #[arg(long = "tagName")]
    pub tag_name: String,
    /// Host name pattern to search for.
    #[arg(long = "hostName")]
    pub host_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct HostNameArgs {
    /// Host name pattern to search for.
    #[arg(long = "hostName")]
    pub host_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct AssetListArgs {
    /// Host name pattern to search for.
    #[arg(long = "hostName")]
    pub host_name: String,
    /// Only hosts carrying this tag.
    #[arg(long = "tagName")]
    pub tag_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DomainRenameArgs {
    #[arg(long = "hostName")]
    pub host_name: Option<String>,
    #[arg(long = "tagName")]
    pub tag_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BulkTagArgs {
    /// Tag name to add.
    #[arg(long = "tagToAdd")]
    pub tag_to_add: Option<String>,
    /// Comma-separated host ids, e.g. 1,2,3.
    #[arg(long = "hostIds")]
    pub host_ids: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GetHostArgs {
    /// Host asset id.
    #[arg(long)]
    pub id: u64,
}

#[derive(Clone, Debug, Args)]
pub struct SearchTagsArgs {
    #[arg(long = "tagName")]
    pub tag_name: String,
}
