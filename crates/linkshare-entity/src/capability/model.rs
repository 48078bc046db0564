//! Public link sharing capabilities advertised by the server.

use serde::{Deserialize, Serialize};

use super::version::ServerVersion;

/// Sharing policy flags advertised by the server for one account.
///
/// Fetched once per dialog session and immutable afterwards. Every flag
/// defaults to "not advertised" so partial capability documents parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareCapabilities {
    /// Version of the server, used to gate newer link options.
    pub server_version: Option<ServerVersion>,
    /// Public links on folders may grant upload rights.
    pub public_upload_allowed: bool,
    /// The server offers upload-only public links.
    pub supports_upload_only: bool,
    /// Public links must carry an expiration date.
    pub expire_date_enforced: bool,
    /// Default (and enforced) lifetime of a new public link in days.
    pub expire_date_enforced_days: u32,
    /// Every public link must be password protected.
    pub password_enforced: bool,
    /// Read-only public links must be password protected.
    pub password_enforced_for_read_only: bool,
    /// Read-write public links must be password protected.
    pub password_enforced_for_read_write: bool,
    /// Upload-only public links must be password protected.
    pub password_enforced_for_upload_only: bool,
}

impl ShareCapabilities {
    /// Whether the server version accepts upload-only public links.
    pub fn public_sharing_write_only_supported(&self) -> bool {
        self.server_version
            .is_some_and(|version| version.is_public_sharing_write_only_supported())
    }

    /// Whether any per-permission password enforcement flag is advertised.
    pub fn has_per_mode_password_policy(&self) -> bool {
        self.password_enforced_for_read_only
            || self.password_enforced_for_read_write
            || self.password_enforced_for_upload_only
    }
}

/// Availability of the capability set within a dialog session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CapabilityState {
    /// The fetch has not completed yet.
    #[default]
    Pending,
    /// The server's capabilities arrived.
    Available(ShareCapabilities),
    /// The fetch failed; no policy is enforced.
    Unavailable,
}

impl CapabilityState {
    /// The capabilities, if they arrived.
    pub fn capabilities(&self) -> Option<&ShareCapabilities> {
        match self {
            Self::Available(capabilities) => Some(capabilities),
            Self::Pending | Self::Unavailable => None,
        }
    }

    /// Whether the fetch has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
