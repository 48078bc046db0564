//! Public link share records and save requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use linkshare_core::types::{AccountId, ShareId};

use super::password::PasswordUpdate;
use super::permission::SharePermissions;

/// An existing public link as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicShare {
    /// Share identifier.
    pub id: ShareId,
    /// Path of the shared file or folder.
    pub path: String,
    /// Display name of the link.
    pub name: String,
    /// Link token.
    #[serde(default)]
    pub token: String,
    /// Full link URL, when the server reported one.
    #[serde(default)]
    pub url: Option<String>,
    /// Permission bitmask.
    pub permissions: SharePermissions,
    /// Whether the link is password protected.
    #[serde(default)]
    pub is_password_protected: bool,
    /// Expiration as milliseconds since the epoch; `0` means none.
    #[serde(default)]
    pub expiration_date_millis: i64,
    /// Whether the shared resource is a folder.
    #[serde(default)]
    pub is_folder: bool,
}

impl PublicShare {
    /// The expiration instant, if one is set.
    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        if self.expiration_date_millis == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.expiration_date_millis)
    }
}

/// Request to create a public link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePublicShare {
    /// Account creating the link.
    pub account_id: AccountId,
    /// Path of the resource to share.
    pub path: String,
    /// Permission bitmask.
    pub permissions: SharePermissions,
    /// Display name of the link.
    pub name: String,
    /// Password, if the link is protected.
    pub password: Option<String>,
    /// Expiration in epoch milliseconds; `0` means none.
    pub expiration_millis: i64,
    /// Whether recipients may upload into the folder.
    pub allow_public_upload: bool,
}

/// Request to update an existing public link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePublicShare {
    /// Account owning the link.
    pub account_id: AccountId,
    /// Link being updated.
    pub share_id: ShareId,
    /// New display name.
    pub name: String,
    /// Password change.
    pub password: PasswordUpdate,
    /// Expiration in epoch milliseconds; a negative value removes it.
    pub expiration_millis: i64,
    /// Permission bitmask.
    pub permissions: SharePermissions,
    /// Whether recipients may upload into the folder.
    pub allow_public_upload: bool,
}

impl UpdatePublicShare {
    /// Expiration value telling the server to drop the expiration date.
    pub const CLEAR_EXPIRATION: i64 = -1;
}
