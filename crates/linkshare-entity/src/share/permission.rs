//! Permission modes and the server's share permission bitmask.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use linkshare_core::AppError;

/// Raw share permission bitmask as stored by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharePermissions(pub u32);

impl SharePermissions {
    /// Read access.
    pub const READ: u32 = 1;
    /// Modify existing files.
    pub const UPDATE: u32 = 2;
    /// Create new files (upload).
    pub const CREATE: u32 = 4;
    /// Delete files.
    pub const DELETE: u32 = 8;
    /// Reshare.
    pub const SHARE: u32 = 16;

    /// The bitmask of an upload-only link.
    pub const UPLOAD_ONLY: SharePermissions = SharePermissions(Self::CREATE);
    /// The bitmask of a read-write link.
    pub const READ_WRITE: SharePermissions =
        SharePermissions(Self::READ | Self::UPDATE | Self::CREATE | Self::DELETE);
    /// The bitmask of a read-only link.
    pub const READ_ONLY: SharePermissions = SharePermissions(Self::READ);
}

/// Mutually exclusive access level of a public link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionMode {
    /// Recipients can only view and download.
    #[default]
    ReadOnly,
    /// Recipients can view, upload, edit and delete.
    ReadWrite,
    /// Recipients can only upload ("file drop").
    UploadOnly,
}

impl PermissionMode {
    /// Map a stored bitmask onto a mode.
    ///
    /// Only the exact upload-only and read-write combinations are
    /// recognized; every other value is read-only.
    pub fn from_permissions(permissions: SharePermissions) -> Self {
        if permissions == SharePermissions::UPLOAD_ONLY {
            Self::UploadOnly
        } else if permissions == SharePermissions::READ_WRITE {
            Self::ReadWrite
        } else {
            Self::ReadOnly
        }
    }

    /// The bitmask sent to the server for this mode.
    pub fn permissions(&self) -> SharePermissions {
        match self {
            Self::ReadOnly => SharePermissions::READ_ONLY,
            Self::ReadWrite => SharePermissions::READ_WRITE,
            Self::UploadOnly => SharePermissions::UPLOAD_ONLY,
        }
    }

    /// Whether recipients can upload into the shared folder.
    pub fn allows_upload(&self) -> bool {
        matches!(self, Self::ReadWrite | Self::UploadOnly)
    }

    /// Return the mode as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
            Self::UploadOnly => "upload-only",
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PermissionMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "read-only" => Ok(Self::ReadOnly),
            "read-write" => Ok(Self::ReadWrite),
            "upload-only" => Ok(Self::UploadOnly),
            _ => Err(AppError::validation(format!(
                "Invalid permission mode: '{s}'. Expected one of: read-only, read-write, upload-only"
            ))),
        }
    }
}
