use qtag_core::HostAsset;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AssetListArgs, GetHostArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// One row of `getAssetList`.
#[derive(Debug, Serialize)]
struct HostRow {
    id: u64,
    name: String,
    dns_host_name: String,
    tags: String,
}

impl From<&HostAsset> for HostRow {
    fn from(host: &HostAsset) -> Self {
        Self {
            id: host.id,
            name: host.name.clone(),
            dns_host_name: host.dns_host_name.clone().unwrap_or_default(),
            tags: host
                .tags
                .list
                .iter()
                .map(|a| a.tag_simple.name.clone().unwrap_or_else(|| a.tag_simple.id.to_string()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub async fn list(args: &AssetListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Searching host assets...");
    let hosts = match ctx
        .workflow
        .search_hosts(&args.host_name, args.tag_name.as_deref())
        .await
    {
        Ok(hosts) => hosts,
        Err(error) => {
            progress.finish_err("Host search failed");
            return Err(error.into());
        }
    };
    progress.finish_clear();

    let rows = hosts.iter().map(HostRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

pub async fn get(args: &GetHostArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let host = ctx.workflow.get_host(args.id).await?;
    output(&host, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qtag_core::{TagAssignment, TagList, TagSimple};

    use super::*;

    #[test]
    fn host_row_flattens_tags() {
        let host = HostAsset {
            id: 42,
            name: "WEB01".into(),
            dns_host_name: None,
            tags: TagList {
                list: vec![
                    TagAssignment {
                        tag_simple: TagSimple {
                            id: 7,
                            name: Some("DMZ".into()),
                        },
                    },
                    TagAssignment {
                        tag_simple: TagSimple { id: 8, name: None },
                    },
                ],
            },
        };

        let row = HostRow::from(&host);
        assert_eq!(row.tags, "DMZ, 8");
        assert_eq!(row.dns_host_name, "");
    }
}
