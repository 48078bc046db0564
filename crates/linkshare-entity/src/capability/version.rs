//! Server version parsing and feature gating.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use linkshare_core::AppError;

/// A dotted server version such as `10.0.1` or `10.2.1.4`.
///
/// Missing trailing components are zero, so `10.1` equals `10.1.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerVersion {
    /// Major version.
    pub major: u16,
    /// Minor version.
    pub minor: u16,
    /// Micro version.
    pub micro: u16,
    /// Patch level.
    pub patch: u16,
}

impl ServerVersion {
    /// First version accepting upload-only ("write only") public links.
    pub const PUBLIC_SHARING_WRITE_ONLY: ServerVersion = ServerVersion::new(10, 0, 1, 0);

    /// Create a version from its components.
    pub const fn new(major: u16, minor: u16, micro: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            micro,
            patch,
        }
    }

    /// Whether the server accepts upload-only public links.
    pub fn is_public_sharing_write_only_supported(&self) -> bool {
        *self >= Self::PUBLIC_SHARING_WRITE_ONLY
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.micro, self.patch
        )
    }
}

impl FromStr for ServerVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Empty server version"));
        }

        let mut parts = [0u16; 4];
        for (index, component) in trimmed.split('.').enumerate() {
            if index >= parts.len() {
                return Err(AppError::validation(format!(
                    "Invalid server version: '{s}'. Expected at most four components"
                )));
            }
            // Servers append build suffixes such as "10.0.3 RC1".
            let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
            parts[index] = digits.parse().map_err(|_| {
                AppError::validation(format!("Invalid server version component in '{s}'"))
            })?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

impl TryFrom<String> for ServerVersion {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServerVersion> for String {
    fn from(version: ServerVersion) -> Self {
        version.to_string()
    }
}
