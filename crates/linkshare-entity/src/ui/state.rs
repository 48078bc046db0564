//! Resolved visibility and checked state of every share form control.

use serde::{Deserialize, Serialize};

use crate::share::permission::PermissionMode;

/// Visibility and checked state of a switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchState {
    /// Whether the switch is shown.
    pub visible: bool,
    /// Whether the switch is on.
    pub checked: bool,
}

impl SwitchState {
    /// A visible switch.
    pub fn shown(checked: bool) -> Self {
        Self {
            visible: true,
            checked,
        }
    }

    /// A hidden switch locked in the given state.
    pub fn locked(checked: bool) -> Self {
        Self {
            visible: false,
            checked,
        }
    }
}

/// Which caption the password row uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordLabel {
    /// The password is optional.
    #[default]
    Optional,
    /// The server requires a password for the selected permission.
    Enforced,
}

/// Everything the rendering layer needs to draw the share form.
///
/// Recomputed from scratch on every input change and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUiState {
    /// Whether the permission radio group is shown.
    pub permission_group_visible: bool,
    /// Whether the upload-only radio option is shown.
    pub upload_only_option_visible: bool,
    /// The radio option that appears selected.
    pub selected_permission: PermissionMode,
    /// Password switch.
    pub password_switch: SwitchState,
    /// Whether the password input is shown.
    pub password_field_visible: bool,
    /// Caption variant of the password row.
    pub password_label: PasswordLabel,
    /// Whether the "password is set, type to replace" hint is shown.
    pub password_placeholder_visible: bool,
    /// Expiration switch.
    pub expiration_switch: SwitchState,
    /// Formatted expiration date shown in the date field.
    pub expiration_value: Option<String>,
    /// Explanation shown when the server enforces expiration.
    pub expiration_explanation: Option<String>,
}

impl ResolvedUiState {
    /// Whether the form will submit a password.
    pub fn password_active(&self) -> bool {
        self.password_switch.checked
    }

    /// Whether the form will submit an expiration date.
    pub fn expiration_active(&self) -> bool {
        self.expiration_switch.checked
    }
}
