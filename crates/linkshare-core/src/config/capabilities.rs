//! Capability source configuration.

use serde::{Deserialize, Serialize};

/// Location of a capability document used instead of a live server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitySourceConfig {
    /// Path to a JSON file holding the server's sharing capabilities.
    #[serde(default)]
    pub file: Option<String>,
}
