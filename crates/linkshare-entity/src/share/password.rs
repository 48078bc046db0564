//! Password change carried by a share update.

use serde::{Deserialize, Serialize};

/// What an update does to the link password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum PasswordUpdate {
    /// Keep whatever password the link has.
    #[default]
    Unchanged,
    /// Remove the password protection.
    Cleared,
    /// Replace the password.
    SetTo(String),
}

impl PasswordUpdate {
    /// Whether the update touches the password at all.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
