//! Individual capability rules applied by the reconciler.
//!
//! Every function here is pure: capabilities arrive as `Option`, where
//! `None` stands for "not arrived" or "fetch failed" and disables every
//! server policy.

use chrono::NaiveDate;

use linkshare_entity::capability::ShareCapabilities;
use linkshare_entity::draft::{ExpirationSelection, ShareDraft};
use linkshare_entity::share::PermissionMode;
use linkshare_entity::ui::{PasswordLabel, SwitchState};

use crate::calendar::ExpirationCalendar;

/// Which permission radio options are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionOptions {
    /// The radio group is shown at all.
    pub group_visible: bool,
    /// The upload-only option is shown.
    pub upload_only_visible: bool,
}

impl PermissionOptions {
    /// The mode the form actually represents for a draft selection.
    ///
    /// A selection that is not offered falls back to read-only.
    pub fn effective_mode(&self, selected: PermissionMode) -> PermissionMode {
        match selected {
            PermissionMode::ReadWrite if self.group_visible => PermissionMode::ReadWrite,
            PermissionMode::UploadOnly if self.upload_only_visible => PermissionMode::UploadOnly,
            _ => PermissionMode::ReadOnly,
        }
    }
}

/// Permission options for a resource.
pub fn permission_options(
    is_folder: bool,
    capabilities: Option<&ShareCapabilities>,
) -> PermissionOptions {
    let Some(caps) = capabilities else {
        return PermissionOptions::default();
    };

    let group_visible = is_folder && caps.public_upload_allowed;
    let upload_only_visible = group_visible
        && caps.public_sharing_write_only_supported()
        && caps.supports_upload_only;

    PermissionOptions {
        group_visible,
        upload_only_visible,
    }
}

/// The permission mode the form shows and a save submits.
///
/// Only a new link's selection is narrowed to the options the server
/// offers. An edited link keeps its stored mode, and without capabilities
/// nothing is narrowed.
pub fn selected_mode(
    options: PermissionOptions,
    selected: PermissionMode,
    capabilities: Option<&ShareCapabilities>,
    is_updating: bool,
) -> PermissionMode {
    if is_updating || capabilities.is_none() {
        return selected;
    }
    options.effective_mode(selected)
}

/// Whether the server requires a password for links of the given mode.
///
/// Per-mode flags win whenever the server advertises any of them; the
/// blanket flag only applies to servers without a per-mode policy.
pub fn password_enforced(capabilities: Option<&ShareCapabilities>, mode: PermissionMode) -> bool {
    let Some(caps) = capabilities else {
        return false;
    };

    let per_mode = match mode {
        PermissionMode::ReadOnly => caps.password_enforced_for_read_only,
        PermissionMode::ReadWrite => caps.password_enforced_for_read_write,
        PermissionMode::UploadOnly => caps.password_enforced_for_upload_only,
    };

    per_mode || (!caps.has_per_mode_password_policy() && caps.password_enforced)
}

/// Resolved password row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordResolution {
    /// Password switch.
    pub switch: SwitchState,
    /// Whether the input is shown.
    pub field_visible: bool,
    /// Caption variant.
    pub label: PasswordLabel,
    /// Whether the "existing password kept" hint is shown.
    pub placeholder_visible: bool,
}

/// Resolve the password row for the effective permission mode.
pub fn password(
    draft: &ShareDraft,
    capabilities: Option<&ShareCapabilities>,
    mode: PermissionMode,
    is_updating: bool,
) -> PasswordResolution {
    let (switch, label) = if password_enforced(capabilities, mode) {
        (SwitchState::locked(true), PasswordLabel::Enforced)
    } else {
        (SwitchState::shown(draft.password_switch), PasswordLabel::Optional)
    };

    let field_visible = switch.checked;
    let placeholder_visible = is_updating
        && draft.had_password()
        && field_visible
        && draft.entered_password().is_none();

    PasswordResolution {
        switch,
        field_visible,
        label,
        placeholder_visible,
    }
}

/// Resolved expiration row, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationResolution {
    /// Expiration switch.
    pub switch: SwitchState,
    /// The date the link will expire on, when the switch is on.
    pub date: Option<NaiveDate>,
    /// Explanation shown when the server enforces expiration.
    pub explanation: Option<String>,
}

/// Resolve the expiration row.
///
/// New links whose expiration the user has not touched get the server's
/// default lifetime. An enforced expiration cannot be switched off; when
/// the draft carries no date the default lifetime fills in, or tomorrow
/// when the server names no lifetime.
pub fn expiration(
    draft: &ShareDraft,
    capabilities: Option<&ShareCapabilities>,
    is_updating: bool,
    calendar: &ExpirationCalendar,
    enforced_template: &str,
) -> ExpirationResolution {
    let default_days = capabilities.map_or(0, |caps| caps.expire_date_enforced_days);
    let enforced = capabilities.is_some_and(|caps| caps.expire_date_enforced);
    let default_date = calendar.default_expiration(default_days);

    let (checked, date) = match draft.expiration {
        ExpirationSelection::Enabled(date) => (true, Some(date)),
        ExpirationSelection::Disabled => (false, None),
        ExpirationSelection::Untouched if !is_updating && default_date.is_some() => {
            (true, default_date)
        }
        ExpirationSelection::Untouched => (false, None),
    };

    if enforced {
        return ExpirationResolution {
            switch: SwitchState::locked(true),
            date: date
                .or(default_date)
                .or_else(|| Some(calendar.earliest_selectable())),
            explanation: Some(enforced_template.replace("{days}", &default_days.to_string())),
        };
    }

    ExpirationResolution {
        switch: SwitchState::shown(checked),
        date: if checked { date } else { None },
        explanation: None,
    }
}
