//! Integration tests for editing existing public links.

mod helpers;

use linkshare_entity::capability::ShareCapabilities;
use linkshare_entity::share::{PasswordUpdate, PermissionMode, SharePermissions, UpdatePublicShare};
use linkshare_entity::ui::PasswordLabel;
use linkshare_core::config::dialog::DialogConfig;
use linkshare_core::types::AccountId;
use linkshare_service::{
    InMemoryShareStore, ShareDialogSession, StaticCapabilityProvider, UserInput,
};

use helpers::{TestDialog, existing_folder_share, modern_capabilities};

/// 2024-04-01T00:00:00Z
const APRIL_FIRST: i64 = 1_711_929_600_000;

#[tokio::test]
async fn test_edit_form_prepopulated() {
    let share = existing_folder_share(15, true, APRIL_FIRST);
    let dialog = TestDialog::edit_share(share, modern_capabilities()).await;

    let draft = dialog.session.draft();
    assert!(draft.is_updating_existing());
    assert_eq!(draft.name, "Photos link");

    let ui = dialog.session.resolve();
    assert_eq!(ui.selected_permission, PermissionMode::ReadWrite);
    assert!(ui.password_switch.checked);
    assert!(ui.password_field_visible);
    assert!(ui.password_placeholder_visible);
    assert!(ui.expiration_switch.checked);
    assert_eq!(ui.expiration_value.as_deref(), Some("Apr 1, 2024"));
}

#[tokio::test]
async fn test_save_without_changes_keeps_password() {
    let share = existing_folder_share(15, true, APRIL_FIRST);
    let share_id = share.id;
    let mut dialog = TestDialog::edit_share(share, modern_capabilities()).await;

    let request = dialog.session.update_request(share_id);
    assert_eq!(request.password, PasswordUpdate::Unchanged);
    assert_eq!(request.expiration_millis, APRIL_FIRST);
    assert_eq!(request.permissions, SharePermissions::READ_WRITE);
    assert!(request.allow_public_upload);

    let updated = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to update link");
    assert!(updated.is_password_protected);
    assert_eq!(updated.expiration_date_millis, APRIL_FIRST);
}

#[tokio::test]
async fn test_typing_password_hides_placeholder() {
    let share = existing_folder_share(1, true, 0);
    let share_id = share.id;
    let mut dialog = TestDialog::edit_share(share, modern_capabilities()).await;

    dialog.session.apply(UserInput::SetPassword("changed".into()));
    assert!(!dialog.session.resolve().password_placeholder_visible);

    dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to update link");
    assert_eq!(dialog.store.password_of(share_id).as_deref(), Some("changed"));
}

#[tokio::test]
async fn test_clearing_password_and_expiration() {
    let share = existing_folder_share(1, true, APRIL_FIRST);
    let share_id = share.id;
    let mut dialog = TestDialog::edit_share(share, modern_capabilities()).await;

    dialog.session.apply(UserInput::SetPasswordSwitch(false));
    dialog.session.apply(UserInput::SetExpirationSwitch(false));

    let request = dialog.session.update_request(share_id);
    assert_eq!(request.password, PasswordUpdate::Cleared);
    assert_eq!(request.expiration_millis, UpdatePublicShare::CLEAR_EXPIRATION);

    let updated = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to update link");
    assert!(!updated.is_password_protected);
    assert_eq!(updated.expiration_date_millis, 0);
    assert!(dialog.store.password_of(share_id).is_none());
}

#[tokio::test]
async fn test_default_expiration_not_applied_when_editing() {
    let capabilities = ShareCapabilities {
        expire_date_enforced_days: 5,
        ..modern_capabilities()
    };
    let share = existing_folder_share(1, false, 0);
    let dialog = TestDialog::edit_share(share, capabilities).await;

    let ui = dialog.session.resolve();
    assert!(ui.expiration_switch.visible);
    assert!(!ui.expiration_switch.checked);
    assert!(ui.expiration_value.is_none());
}

#[tokio::test]
async fn test_enforced_expiration_applies_when_editing() {
    let capabilities = ShareCapabilities {
        expire_date_enforced: true,
        expire_date_enforced_days: 7,
        ..modern_capabilities()
    };
    let share = existing_folder_share(1, false, 0);
    let dialog = TestDialog::edit_share(share, capabilities).await;

    let ui = dialog.session.resolve();
    assert!(!ui.expiration_switch.visible);
    assert!(ui.expiration_switch.checked);
    assert_eq!(ui.expiration_value.as_deref(), Some("Mar 22, 2024"));
}

#[tokio::test]
async fn test_edit_upload_only_link() {
    let capabilities = ShareCapabilities {
        password_enforced_for_upload_only: true,
        ..modern_capabilities()
    };
    let share = existing_folder_share(4, true, 0);
    let dialog = TestDialog::edit_share(share, capabilities).await;

    let ui = dialog.session.resolve();
    assert_eq!(ui.selected_permission, PermissionMode::UploadOnly);
    assert_eq!(ui.password_label, PasswordLabel::Enforced);
    assert!(ui.password_placeholder_visible);
}

#[tokio::test]
async fn test_failed_capability_fetch_keeps_access_level() {
    let share = existing_folder_share(15, false, 0);
    let share_id = share.id;
    let store = InMemoryShareStore::new(helpers::BASE_URL, ShareCapabilities::default());
    store.insert_existing(share.clone());

    let mut session =
        ShareDialogSession::edit_share(AccountId::new(), &share, &DialogConfig::default(), helpers::today())
            .expect("Failed to open dialog");
    session
        .load_capabilities(&StaticCapabilityProvider::unavailable())
        .await;

    assert_eq!(session.resolve().selected_permission, PermissionMode::ReadWrite);

    let updated = session
        .save(&store, &store)
        .await
        .expect("Failed to update link");
    assert_eq!(updated.permissions, SharePermissions::READ_WRITE);
    assert_eq!(
        store.get(share_id).map(|stored| stored.permissions),
        Some(SharePermissions::READ_WRITE)
    );
}
