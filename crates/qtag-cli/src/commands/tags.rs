use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchTagsArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn search(args: &SearchTagsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tags = ctx.workflow.search_tags(&args.tag_name).await?;
    output(&tags, flags.format)
}
