use std::sync::Arc;

use qtag_api::HttpTransport;
use qtag_config::QtagConfig;
use qtag_workflow::Workflow;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub workflow: Workflow<HttpTransport>,
}

impl AppContext {
    /// Build the HTTP transport and workflow from a complete configuration.
    pub fn init(config: &QtagConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(config)?;
        tracing::debug!(
            url = %config.api.url,
            username = %config.credentials.username,
            policy = %config.general.match_policy,
            "client initialized"
        );

        let workflow = Workflow::new(Arc::new(transport), config.general.match_policy);
        Ok(Self { workflow })
    }
}
