use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{hosts, rename, tagging, tags};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::AddTag(args) => tagging::add(&args, ctx, flags).await,
        Commands::RemoveTag(args) => tagging::remove(&args, ctx, flags).await,
        Commands::AddTagToHosts(args) => tagging::bulk_add(&args, ctx, flags).await,
        Commands::UpdateHostName(args) => rename::single(&args, ctx, flags).await,
        Commands::UpdateHostsWithDomain(args) => rename::bulk(&args, ctx, flags).await,
        Commands::GetAssetList(args) => hosts::list(&args, ctx, flags).await,
        Commands::GetHost(args) => hosts::get(&args, ctx, flags).await,
        Commands::SearchTags(args) => tags::search(&args, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is pre-dispatched in main"),
    }
}
