//! Capability-driven resolution of the public link form.

pub mod rules;

use chrono::NaiveDate;

use linkshare_entity::capability::CapabilityState;
use linkshare_entity::draft::ShareDraft;
use linkshare_entity::ui::ResolvedUiState;

use crate::calendar::ExpirationCalendar;

/// Maps a draft and the server capability set onto the form state.
///
/// Stateless apart from the session calendar and the explanation
/// template, both fixed at construction. [`resolve`](Self::resolve) never
/// fails and returns identical output for identical input.
#[derive(Debug, Clone)]
pub struct ShareSettingsReconciler {
    calendar: ExpirationCalendar,
    enforced_expiration_template: String,
}

impl ShareSettingsReconciler {
    /// Creates a reconciler for one dialog session.
    pub fn new(calendar: ExpirationCalendar, enforced_expiration_template: impl Into<String>) -> Self {
        Self {
            calendar,
            enforced_expiration_template: enforced_expiration_template.into(),
        }
    }

    /// The session calendar.
    pub fn calendar(&self) -> &ExpirationCalendar {
        &self.calendar
    }

    /// Resolves the complete form state.
    pub fn resolve(
        &self,
        draft: &ShareDraft,
        capabilities: &CapabilityState,
        is_updating: bool,
    ) -> ResolvedUiState {
        let caps = capabilities.capabilities();

        let options = rules::permission_options(draft.is_folder, caps);
        let selected = rules::selected_mode(options, draft.permission_mode, caps, is_updating);
        let password = rules::password(draft, caps, selected, is_updating);
        let expiration = rules::expiration(
            draft,
            caps,
            is_updating,
            &self.calendar,
            &self.enforced_expiration_template,
        );

        ResolvedUiState {
            permission_group_visible: options.group_visible,
            upload_only_option_visible: options.upload_only_visible,
            selected_permission: selected,
            password_switch: password.switch,
            password_field_visible: password.field_visible,
            password_label: password.label,
            password_placeholder_visible: password.placeholder_visible,
            expiration_switch: expiration.switch,
            expiration_value: expiration.date.map(|date| self.calendar.format(date)),
            expiration_explanation: expiration.explanation,
        }
    }

    /// The date a save would submit, if expiration is active.
    pub fn expiration_date(
        &self,
        draft: &ShareDraft,
        capabilities: &CapabilityState,
        is_updating: bool,
    ) -> Option<NaiveDate> {
        rules::expiration(
            draft,
            capabilities.capabilities(),
            is_updating,
            &self.calendar,
            &self.enforced_expiration_template,
        )
        .date
    }
}
