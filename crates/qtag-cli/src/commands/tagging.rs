use qtag_workflow::{BulkTagOutcome, TagChangeOutcome};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{BulkTagArgs, TagHostArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn add(args: &TagHostArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Adding tag...");
    let outcome = ctx
        .workflow
        .add_tag_to_host(&args.tag_name, &args.host_name)
        .await;
    report(outcome, &progress, flags)
}

pub async fn remove(args: &TagHostArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Removing tag...");
    let outcome = ctx
        .workflow
        .remove_tag_from_host(&args.tag_name, &args.host_name)
        .await;
    report(outcome, &progress, flags)
}

fn report(
    outcome: Result<TagChangeOutcome, qtag_workflow::WorkflowError>,
    progress: &Progress,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match outcome {
        Ok(outcome) => {
            match &outcome {
                TagChangeOutcome::Applied { .. } => progress.finish_clear(),
                TagChangeOutcome::TagNotFound { tag, .. } => {
                    progress.finish_err(&format!("Tag '{tag}' not found"));
                }
                TagChangeOutcome::Failed { .. } => progress.finish_err("Tag change failed"),
            }
            output(&outcome, flags.format)
        }
        Err(error) => {
            progress.finish_err("Tag change aborted");
            Err(error.into())
        }
    }
}

pub async fn bulk_add(args: &BulkTagArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Tagging hosts...");
    let outcome = match ctx
        .workflow
        .bulk_tag_hosts(
            args.tag_to_add.as_deref(),
            args.host_ids.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(outcome) => outcome,
        Err(error) => {
            progress.finish_err("Tagging aborted");
            return Err(error.into());
        }
    };

    match &outcome {
        BulkTagOutcome::TagNotFound { tag } => progress.finish_err(&format!("Tag '{tag}' not found")),
        BulkTagOutcome::Processed { results, .. } => progress.finish_ok(&format!(
            "Tagged {} of {} hosts",
            outcome.tagged_count(),
            results.len()
        )),
    }
    output(&outcome, flags.format)
}
