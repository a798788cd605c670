use qtag_workflow::{BulkRenameOutcome, RenameOutcome};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DomainRenameArgs, HostNameArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn single(args: &HostNameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Renaming host...");
    let outcome = match ctx.workflow.rename_host_to_dns_name(&args.host_name).await {
        Ok(outcome) => outcome,
        Err(error) => {
            progress.finish_err("Rename aborted");
            return Err(error.into());
        }
    };

    match &outcome {
        RenameOutcome::Completed(result) if result.is_renamed() => progress.finish_clear(),
        RenameOutcome::NoHostFound { .. } => progress.finish_err("No host found"),
        RenameOutcome::MultipleHostsFound { hosts, .. } => {
            progress.finish_err(&format!("{} hosts found, narrow the search", hosts.len()));
        }
        RenameOutcome::Completed(_) => progress.finish_err("Host not renamed"),
    }
    output(&outcome, flags.format)
}

pub async fn bulk(args: &DomainRenameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Renaming hosts...");
    let outcome = match ctx
        .workflow
        .rename_hosts_with_domain(args.host_name.as_deref(), args.tag_name.as_deref())
        .await
    {
        Ok(outcome) => outcome,
        Err(error) => {
            progress.finish_err("Rename aborted");
            return Err(error.into());
        }
    };

    match &outcome {
        BulkRenameOutcome::NoHostsFound { .. } => progress.finish_err("No hosts found"),
        BulkRenameOutcome::Processed { results } => progress.finish_ok(&format!(
            "Renamed {} of {} hosts",
            outcome.renamed_count(),
            results.len()
        )),
    }
    output(&outcome, flags.format)
}
