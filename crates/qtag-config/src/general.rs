//! General application configuration.

use qtag_core::MatchPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How name searches are narrowed to one host or tag before a mutation.
    #[serde(default)]
    pub match_policy: MatchPolicy,
}
