//! Share dialog session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use linkshare_core::config::dialog::DialogConfig;
use linkshare_core::error::{AppError, ErrorKind};
use linkshare_core::result::AppResult;
use linkshare_core::types::{AccountId, ShareId};
use linkshare_entity::capability::{CapabilityState, ShareCapabilities};
use linkshare_entity::draft::{ExpirationSelection, ShareDraft};
use linkshare_entity::share::{
    CreatePublicShare, PasswordUpdate, PublicShare, UpdatePublicShare,
};
use linkshare_entity::ui::{PasswordFieldPresentation, PasswordLabel, ResolvedUiState};

use super::input::UserInput;
use crate::calendar::ExpirationCalendar;
use crate::capability::CapabilityProvider;
use crate::reconciler::ShareSettingsReconciler;
use crate::share::naming::default_link_name;
use crate::share::usecase::{ShareCreateUseCase, ShareUpdateUseCase};

/// The file or folder a new link is created for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareTarget {
    /// Account creating the link.
    pub account_id: AccountId,
    /// Remote path; folder paths end with `/`.
    pub path: String,
    /// File name shown in the default link name.
    pub file_name: String,
    /// Whether the target is a folder.
    pub is_folder: bool,
    /// Names of links that already exist on the target.
    #[serde(default)]
    pub existing_link_names: Vec<String>,
}

/// Everything the host renders for the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogView {
    /// Resolved form controls.
    pub ui: ResolvedUiState,
    /// Whether the password input shows dots.
    pub password_masked: bool,
    /// Whether the show/hide password affordance is displayed.
    pub password_toggle_visible: bool,
    /// Whether the capability fetch is still running.
    pub loading: bool,
    /// Inline error from the last failed save.
    pub error: Option<String>,
}

/// State of one open share dialog.
#[derive(Debug, Clone)]
pub struct ShareDialogSession {
    account_id: AccountId,
    path: String,
    share_id: Option<ShareId>,
    draft: ShareDraft,
    capabilities: CapabilityState,
    reconciler: ShareSettingsReconciler,
    password_field: PasswordFieldPresentation,
    error: Option<String>,
}

impl ShareDialogSession {
    /// Opens a dialog for a new link.
    pub fn new_share(target: ShareTarget, config: &DialogConfig, today: NaiveDate) -> AppResult<Self> {
        let name = default_link_name(
            &config.link_name_template,
            &target.file_name,
            &target.existing_link_names,
        );

        Ok(Self {
            account_id: target.account_id,
            path: target.path,
            share_id: None,
            draft: ShareDraft::new(name, target.is_folder),
            capabilities: CapabilityState::Pending,
            reconciler: Self::reconciler(config, today)?,
            password_field: PasswordFieldPresentation::default(),
            error: None,
        })
    }

    /// Opens a dialog editing an existing link.
    pub fn edit_share(
        account_id: AccountId,
        share: &PublicShare,
        config: &DialogConfig,
        today: NaiveDate,
    ) -> AppResult<Self> {
        Ok(Self {
            account_id,
            path: share.path.clone(),
            share_id: Some(share.id),
            draft: ShareDraft::from_existing(share),
            capabilities: CapabilityState::Pending,
            reconciler: Self::reconciler(config, today)?,
            password_field: PasswordFieldPresentation::default(),
            error: None,
        })
    }

    fn reconciler(config: &DialogConfig, today: NaiveDate) -> AppResult<ShareSettingsReconciler> {
        let calendar = ExpirationCalendar::new(today, config.date_format.clone())?;
        Ok(ShareSettingsReconciler::new(
            calendar,
            config.enforced_expiration_template.clone(),
        ))
    }

    /// The current draft.
    pub fn draft(&self) -> &ShareDraft {
        &self.draft
    }

    /// The capability state.
    pub fn capability_state(&self) -> &CapabilityState {
        &self.capabilities
    }

    /// Whether the capability fetch is still running.
    pub fn is_loading(&self) -> bool {
        !self.capabilities.is_settled()
    }

    /// Fetches capabilities from a provider and applies the result.
    pub async fn load_capabilities(&mut self, provider: &dyn CapabilityProvider) {
        let result = provider.fetch(self.account_id).await;
        self.on_capabilities(result);
    }

    /// Applies the one-shot capability fetch result.
    ///
    /// A failed fetch is logged and leaves the form without any server
    /// policy. Deliveries after the first are ignored.
    pub fn on_capabilities(&mut self, result: AppResult<ShareCapabilities>) {
        if self.capabilities.is_settled() {
            debug!(account_id = %self.account_id, "Ignoring repeated capability delivery");
            return;
        }

        self.capabilities = match result {
            Ok(capabilities) => {
                info!(
                    account_id = %self.account_id,
                    password_enforced = capabilities.password_enforced,
                    expire_date_enforced = capabilities.expire_date_enforced,
                    "Share capabilities arrived"
                );
                CapabilityState::Available(capabilities)
            }
            Err(e) => {
                warn!(
                    account_id = %self.account_id,
                    error = %e,
                    "Capability fetch failed, no sharing policy enforced"
                );
                CapabilityState::Unavailable
            }
        };
    }

    /// Resolves the form controls for the current draft.
    pub fn resolve(&self) -> ResolvedUiState {
        self.reconciler.resolve(
            &self.draft,
            &self.capabilities,
            self.draft.is_updating_existing(),
        )
    }

    /// The full view the host renders.
    pub fn view(&self) -> DialogView {
        DialogView {
            ui: self.resolve(),
            password_masked: self.password_field.is_masked(),
            password_toggle_visible: self.password_field.toggle_visible(),
            loading: self.is_loading(),
            error: self.error.clone(),
        }
    }

    /// Applies a user-initiated change to the draft.
    pub fn apply(&mut self, input: UserInput) {
        match input {
            UserInput::SelectPermission(mode) => {
                self.draft.permission_mode = mode;
            }
            UserInput::SetName(name) => {
                self.draft.name = name;
            }
            UserInput::SetPassword(password) => {
                self.draft.password = Some(password);
            }
            UserInput::SetPasswordSwitch(on) => {
                if self.resolve().password_label == PasswordLabel::Enforced {
                    debug!("Password is enforced, switch change ignored");
                    return;
                }
                self.draft.password_switch = on;
                if !on {
                    self.draft.password = None;
                }
            }
            UserInput::SetExpirationSwitch(on) => {
                if self.expiration_enforced() {
                    debug!("Expiration is enforced, switch change ignored");
                    return;
                }
                self.draft.expiration = if on {
                    let calendar = self.reconciler.calendar();
                    let date = calendar
                        .default_expiration(self.default_expiration_days())
                        .unwrap_or_else(|| calendar.earliest_selectable());
                    ExpirationSelection::Enabled(date)
                } else {
                    ExpirationSelection::Disabled
                };
            }
            UserInput::PickExpirationDate(date) => {
                self.select_expiration_date(date);
            }
            UserInput::SetExpirationText(text) => match self.reconciler.calendar().parse(&text) {
                Ok(date) => self.select_expiration_date(date),
                Err(e) => {
                    warn!(error = %e, "Unreadable expiration date, treating as unset");
                    self.draft.expiration = ExpirationSelection::Disabled;
                }
            },
            UserInput::FocusPassword(focused) => {
                self.password_field.set_focused(focused);
            }
            UserInput::TogglePasswordMask => {
                self.password_field.toggle_mask();
            }
        }
    }

    /// Takes a picked or typed date if it lies within the allowed window.
    fn select_expiration_date(&mut self, date: NaiveDate) {
        let max_days = self.expiration_enforced().then(|| self.default_expiration_days());
        if self.reconciler.calendar().is_selectable(date, max_days) {
            self.draft.expiration = ExpirationSelection::Enabled(date);
        } else {
            warn!(date = %date, "Expiration date outside the allowed window ignored");
        }
    }

    fn default_expiration_days(&self) -> u32 {
        self.capabilities
            .capabilities()
            .map_or(0, |caps| caps.expire_date_enforced_days)
    }

    fn expiration_enforced(&self) -> bool {
        self.capabilities
            .capabilities()
            .is_some_and(|caps| caps.expire_date_enforced)
    }

    fn expiration_millis(&self) -> Option<i64> {
        self.reconciler
            .expiration_date(
                &self.draft,
                &self.capabilities,
                self.draft.is_updating_existing(),
            )
            .map(ExpirationCalendar::to_millis)
    }

    /// The request a save of a new link would send.
    pub fn create_request(&self) -> CreatePublicShare {
        let ui = self.resolve();
        let password = if ui.password_active() {
            self.draft.entered_password().map(String::from)
        } else {
            None
        };

        CreatePublicShare {
            account_id: self.account_id,
            path: self.path.clone(),
            permissions: ui.selected_permission.permissions(),
            name: self.draft.name.clone(),
            password,
            expiration_millis: self.expiration_millis().unwrap_or(0),
            allow_public_upload: self.draft.is_folder && ui.selected_permission.allows_upload(),
        }
    }

    /// The request a save of an edited link would send.
    pub fn update_request(&self, share_id: ShareId) -> UpdatePublicShare {
        let ui = self.resolve();
        let password = match (ui.password_active(), self.draft.entered_password()) {
            (true, Some(password)) => PasswordUpdate::SetTo(password.to_string()),
            (true, None) => PasswordUpdate::Unchanged,
            (false, _) if self.draft.had_password() => PasswordUpdate::Cleared,
            (false, _) => PasswordUpdate::Unchanged,
        };

        UpdatePublicShare {
            account_id: self.account_id,
            share_id,
            name: self.draft.name.clone(),
            password,
            expiration_millis: self
                .expiration_millis()
                .unwrap_or(UpdatePublicShare::CLEAR_EXPIRATION),
            permissions: ui.selected_permission.permissions(),
            allow_public_upload: self.draft.is_folder && ui.selected_permission.allows_upload(),
        }
    }

    /// Saves the link through the matching use case.
    ///
    /// On failure the message is kept for inline display and the session
    /// stays usable for another attempt.
    pub async fn save(
        &mut self,
        create: &dyn ShareCreateUseCase,
        update: &dyn ShareUpdateUseCase,
    ) -> AppResult<PublicShare> {
        let result = match self.share_id {
            Some(share_id) => update.update(self.update_request(share_id)).await,
            None => create.create(self.create_request()).await,
        };

        match result {
            Ok(share) => {
                info!(
                    account_id = %self.account_id,
                    share_id = %share.id,
                    updated = self.share_id.is_some(),
                    "Public link saved"
                );
                self.error = None;
                Ok(share)
            }
            Err(e) => {
                let message = e.user_message();
                warn!(account_id = %self.account_id, error = %e, "Saving public link failed");
                self.error = Some(message.clone());
                Err(AppError::with_source(ErrorKind::ShareSave, message, e))
            }
        }
    }
}
