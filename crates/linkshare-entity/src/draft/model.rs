//! The mutable form selections of one share dialog session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::share::model::PublicShare;
use crate::share::permission::PermissionMode;

/// The user's expiration choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "date", rename_all = "snake_case")]
pub enum ExpirationSelection {
    /// The user has not touched the expiration control; server defaults apply.
    #[default]
    Untouched,
    /// The user switched the expiration off.
    Disabled,
    /// The link expires on the given date.
    Enabled(NaiveDate),
}

impl ExpirationSelection {
    /// The chosen date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Enabled(date) => Some(*date),
            Self::Untouched | Self::Disabled => None,
        }
    }
}

/// Form selections for a public link, created empty for a new link or
/// pre-populated from an existing one.
///
/// Destroyed with the dialog; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDraft {
    /// Selected access level.
    pub permission_mode: PermissionMode,
    /// Link name.
    pub name: String,
    /// Password typed by the user.
    pub password: Option<String>,
    /// Checked state of the password switch as last set by the user.
    pub password_switch: bool,
    /// Expiration choice.
    pub expiration: ExpirationSelection,
    /// Whether the shared resource is a folder.
    pub is_folder: bool,
    is_updating_existing: bool,
    had_password: bool,
}

impl ShareDraft {
    /// Draft for a new link.
    pub fn new(name: impl Into<String>, is_folder: bool) -> Self {
        Self {
            permission_mode: PermissionMode::ReadOnly,
            name: name.into(),
            password: None,
            password_switch: false,
            expiration: ExpirationSelection::Untouched,
            is_folder,
            is_updating_existing: false,
            had_password: false,
        }
    }

    /// Draft for editing an existing link.
    ///
    /// The stored password is never revealed: the switch is pre-checked
    /// and the field left empty.
    pub fn from_existing(share: &PublicShare) -> Self {
        let expiration = match share.expiration_date() {
            Some(instant) => ExpirationSelection::Enabled(instant.date_naive()),
            None => ExpirationSelection::Disabled,
        };

        Self {
            permission_mode: PermissionMode::from_permissions(share.permissions),
            name: share.name.clone(),
            password: None,
            password_switch: share.is_password_protected,
            expiration,
            is_folder: share.is_folder,
            is_updating_existing: true,
            had_password: share.is_password_protected,
        }
    }

    /// Whether this draft edits an existing link.
    pub fn is_updating_existing(&self) -> bool {
        self.is_updating_existing
    }

    /// Whether the edited link was password protected when the dialog opened.
    pub fn had_password(&self) -> bool {
        self.had_password
    }

    /// The typed password, if it is non-empty.
    pub fn entered_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use linkshare_core::types::ShareId;

    use super::*;
    use crate::share::permission::SharePermissions;

    fn existing(permissions: u32, protected: bool, millis: i64) -> PublicShare {
        PublicShare {
            id: ShareId::new(),
            path: "/Documents".into(),
            name: "Documents link".into(),
            token: "tok".into(),
            url: None,
            permissions: SharePermissions(permissions),
            is_password_protected: protected,
            expiration_date_millis: millis,
            is_folder: true,
        }
    }

    #[test]
    fn test_new_draft_is_untouched() {
        let draft = ShareDraft::new("Documents link", true);
        assert!(!draft.is_updating_existing());
        assert_eq!(draft.expiration, ExpirationSelection::Untouched);
        assert_eq!(draft.permission_mode, PermissionMode::ReadOnly);
    }

    #[test]
    fn test_from_existing_protected_share() {
        let draft = ShareDraft::from_existing(&existing(15, true, 0));
        assert!(draft.is_updating_existing());
        assert!(draft.had_password());
        assert!(draft.password_switch);
        assert!(draft.password.is_none());
        assert_eq!(draft.permission_mode, PermissionMode::ReadWrite);
        assert_eq!(draft.expiration, ExpirationSelection::Disabled);
    }

    #[test]
    fn test_from_existing_with_expiration() {
        // 2024-03-15T00:00:00Z
        let draft = ShareDraft::from_existing(&existing(4, false, 1_710_460_800_000));
        assert_eq!(draft.permission_mode, PermissionMode::UploadOnly);
        assert_eq!(
            draft.expiration.date(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_entered_password_ignores_empty() {
        let mut draft = ShareDraft::new("x", false);
        draft.password = Some(String::new());
        assert!(draft.entered_password().is_none());
        draft.password = Some("pw".into());
        assert_eq!(draft.entered_password(), Some("pw"));
    }
}
