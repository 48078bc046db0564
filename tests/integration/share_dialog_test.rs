//! Integration tests for creating public links through the share dialog.

mod helpers;

use linkshare_core::ErrorKind;
use linkshare_core::config::dialog::DialogConfig;
use linkshare_core::types::AccountId;
use linkshare_entity::capability::{ServerVersion, ShareCapabilities};
use linkshare_entity::share::{PermissionMode, SharePermissions};
use linkshare_entity::ui::PasswordLabel;
use linkshare_service::{
    InMemoryShareStore, ShareDialogSession, ShareTarget, StaticCapabilityProvider, UserInput,
};

use helpers::{TestDialog, date, modern_capabilities};

#[tokio::test]
async fn test_create_upload_only_folder_link() {
    let mut dialog = TestDialog::new_share("/Inbox/", modern_capabilities()).await;

    let ui = dialog.session.resolve();
    assert!(ui.permission_group_visible);
    assert!(ui.upload_only_option_visible);
    assert_eq!(ui.selected_permission, PermissionMode::ReadOnly);

    dialog
        .session
        .apply(UserInput::SelectPermission(PermissionMode::UploadOnly));
    let share = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to save link");

    assert_eq!(share.name, "Inbox link");
    assert_eq!(share.permissions, SharePermissions::UPLOAD_ONLY);
    assert!(share.is_folder);
    assert!(share.url.is_some_and(|url| url.starts_with(helpers::BASE_URL)));
    assert_eq!(dialog.store.len(), 1);
}

#[tokio::test]
async fn test_old_server_hides_upload_only() {
    let capabilities = ShareCapabilities {
        server_version: Some("10.0.0".parse::<ServerVersion>().expect("version")),
        ..modern_capabilities()
    };
    let mut dialog = TestDialog::new_share("/Inbox/", capabilities).await;

    dialog
        .session
        .apply(UserInput::SelectPermission(PermissionMode::UploadOnly));
    let ui = dialog.session.resolve();
    assert!(ui.permission_group_visible);
    assert!(!ui.upload_only_option_visible);
    assert_eq!(ui.selected_permission, PermissionMode::ReadOnly);

    let request = dialog.session.create_request();
    assert_eq!(request.permissions, SharePermissions::READ_ONLY);
    assert!(!request.allow_public_upload);
}

#[tokio::test]
async fn test_file_links_have_no_permission_choice() {
    let dialog = TestDialog::new_share("/Documents/report.pdf", modern_capabilities()).await;

    let ui = dialog.session.resolve();
    assert!(!ui.permission_group_visible);
    assert!(!ui.upload_only_option_visible);
    assert_eq!(dialog.session.draft().name, "report.pdf link");
}

#[tokio::test]
async fn test_enforced_expiration_is_locked_on() {
    let capabilities = ShareCapabilities {
        expire_date_enforced: true,
        expire_date_enforced_days: 7,
        ..modern_capabilities()
    };
    let mut dialog = TestDialog::new_share("/Photos/", capabilities).await;

    let ui = dialog.session.resolve();
    assert!(!ui.expiration_switch.visible);
    assert!(ui.expiration_switch.checked);
    assert_eq!(ui.expiration_value.as_deref(), Some("Mar 22, 2024"));
    assert_eq!(
        ui.expiration_explanation.as_deref(),
        Some("The server enforces an expiration date of 7 days for public links")
    );

    dialog.session.apply(UserInput::SetExpirationSwitch(false));
    assert!(dialog.session.resolve().expiration_active());

    dialog
        .session
        .apply(UserInput::PickExpirationDate(date(2024, 4, 30)));
    assert_eq!(
        dialog.session.resolve().expiration_value.as_deref(),
        Some("Mar 22, 2024")
    );

    let share = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to save link");
    assert_eq!(share.expiration_date_millis, 1_711_065_600_000);
}

#[tokio::test]
async fn test_default_expiration_applied_once() {
    let capabilities = ShareCapabilities {
        expire_date_enforced_days: 5,
        ..modern_capabilities()
    };
    let mut dialog = TestDialog::new_share("/Photos/", capabilities).await;

    let ui = dialog.session.resolve();
    assert!(ui.expiration_switch.visible);
    assert!(ui.expiration_switch.checked);
    assert_eq!(ui.expiration_value.as_deref(), Some("Mar 20, 2024"));
    assert!(ui.expiration_explanation.is_none());

    dialog.session.apply(UserInput::SetExpirationSwitch(false));
    dialog.session.apply(UserInput::SetName("Holiday".into()));
    let ui = dialog.session.resolve();
    assert!(!ui.expiration_switch.checked);
    assert!(ui.expiration_value.is_none());

    let request = dialog.session.create_request();
    assert_eq!(request.expiration_millis, 0);
    assert_eq!(request.name, "Holiday");
}

#[tokio::test]
async fn test_password_required_for_read_write_only() {
    let capabilities = ShareCapabilities {
        password_enforced_for_read_write: true,
        ..modern_capabilities()
    };
    let mut dialog = TestDialog::new_share("/Shared/", capabilities).await;

    assert_eq!(dialog.session.resolve().password_label, PasswordLabel::Optional);

    dialog
        .session
        .apply(UserInput::SelectPermission(PermissionMode::ReadWrite));
    let ui = dialog.session.resolve();
    assert_eq!(ui.password_label, PasswordLabel::Enforced);
    assert!(!ui.password_switch.visible);
    assert!(ui.password_field_visible);

    let err = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ShareSave);
    assert!(dialog.session.view().error.is_some());
    assert!(dialog.store.is_empty());

    dialog.session.apply(UserInput::SetPassword("s3cret".into()));
    let share = dialog
        .session
        .save(&dialog.store, &dialog.store)
        .await
        .expect("Failed to save link");
    assert!(share.is_password_protected);
    assert_eq!(share.permissions, SharePermissions::READ_WRITE);
    assert_eq!(dialog.store.password_of(share.id).as_deref(), Some("s3cret"));
    assert!(dialog.session.view().error.is_none());
}

#[tokio::test]
async fn test_blanket_password_policy() {
    let capabilities = ShareCapabilities {
        password_enforced: true,
        ..modern_capabilities()
    };
    let mut dialog = TestDialog::new_share("/Shared/", capabilities).await;

    assert_eq!(dialog.session.resolve().password_label, PasswordLabel::Enforced);
    dialog.session.apply(UserInput::SetPasswordSwitch(false));
    assert!(dialog.session.resolve().password_active());
}

#[tokio::test]
async fn test_failed_capability_fetch_enforces_nothing() {
    let target = ShareTarget {
        account_id: AccountId::new(),
        path: "/Photos/".into(),
        file_name: "Photos".into(),
        is_folder: true,
        existing_link_names: vec!["Photos link".into()],
    };
    let mut session = ShareDialogSession::new_share(target, &DialogConfig::default(), helpers::today())
        .expect("Failed to open dialog");
    assert!(session.view().loading);

    session
        .load_capabilities(&StaticCapabilityProvider::unavailable())
        .await;
    let view = session.view();
    assert!(!view.loading);
    assert!(!view.ui.permission_group_visible);
    assert!(view.ui.password_switch.visible);
    assert!(view.ui.expiration_switch.visible);
    assert!(!view.ui.expiration_switch.checked);

    // Late delivery after the failure is ignored.
    session.on_capabilities(Ok(ShareCapabilities {
        password_enforced: true,
        ..Default::default()
    }));
    assert_eq!(session.resolve().password_label, PasswordLabel::Optional);

    let store = InMemoryShareStore::new(helpers::BASE_URL, ShareCapabilities::default());
    let share = session
        .save(&store, &store)
        .await
        .expect("Failed to save link");
    assert_eq!(share.name, "Photos link (2)");
}

#[tokio::test]
async fn test_password_mask_follows_focus() {
    let mut dialog = TestDialog::new_share("/Photos/", modern_capabilities()).await;

    dialog.session.apply(UserInput::SetPasswordSwitch(true));
    dialog.session.apply(UserInput::FocusPassword(true));
    assert!(dialog.session.view().password_toggle_visible);

    dialog.session.apply(UserInput::TogglePasswordMask);
    assert!(!dialog.session.view().password_masked);

    dialog.session.apply(UserInput::FocusPassword(false));
    let view = dialog.session.view();
    assert!(view.password_masked);
    assert!(!view.password_toggle_visible);
}
