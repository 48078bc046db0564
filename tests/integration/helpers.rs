//! Shared test helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use linkshare_core::config::dialog::DialogConfig;
use linkshare_core::types::{AccountId, ShareId};
use linkshare_entity::capability::{ServerVersion, ShareCapabilities};
use linkshare_entity::share::{PublicShare, SharePermissions};
use linkshare_service::{
    InMemoryShareStore, ShareDialogSession, ShareTarget, StaticCapabilityProvider,
};

/// Base URL links are issued under.
pub const BASE_URL: &str = "https://cloud.example.com";

/// Test dialog context
pub struct TestDialog {
    /// The dialog session under test
    pub session: ShareDialogSession,
    /// Server-side store the dialog saves to
    pub store: InMemoryShareStore,
    /// Capabilities the server advertises
    pub provider: StaticCapabilityProvider,
}

impl TestDialog {
    /// Opens a new-link dialog for `path` and delivers the capabilities.
    pub async fn new_share(path: &str, capabilities: ShareCapabilities) -> Self {
        let target = ShareTarget {
            account_id: AccountId::new(),
            path: path.to_string(),
            file_name: file_name(path),
            is_folder: path.ends_with('/'),
            existing_link_names: Vec::new(),
        };
        let mut session = ShareDialogSession::new_share(target, &DialogConfig::default(), today())
            .expect("Failed to open dialog");

        let provider = StaticCapabilityProvider::new(capabilities.clone());
        session.load_capabilities(&provider).await;

        Self {
            session,
            store: InMemoryShareStore::new(BASE_URL, capabilities),
            provider,
        }
    }

    /// Opens an edit dialog for a link that already exists on the server.
    pub async fn edit_share(share: PublicShare, capabilities: ShareCapabilities) -> Self {
        let mut session =
            ShareDialogSession::edit_share(AccountId::new(), &share, &DialogConfig::default(), today())
                .expect("Failed to open dialog");

        let store = InMemoryShareStore::new(BASE_URL, capabilities.clone());
        store.insert_existing(share);

        let provider = StaticCapabilityProvider::new(capabilities);
        session.load_capabilities(&provider).await;

        Self {
            session,
            store,
            provider,
        }
    }
}

/// The fixed date dialogs open on.
pub fn today() -> NaiveDate {
    date(2024, 3, 15)
}

/// Shorthand date constructor.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid date")
}

/// Capabilities of a current server allowing every kind of public link.
pub fn modern_capabilities() -> ShareCapabilities {
    ShareCapabilities {
        server_version: Some("10.0.3".parse::<ServerVersion>().expect("Invalid version")),
        public_upload_allowed: true,
        supports_upload_only: true,
        ..Default::default()
    }
}

/// An existing link on a folder.
pub fn existing_folder_share(permissions: u32, protected: bool, expiration_millis: i64) -> PublicShare {
    PublicShare {
        id: ShareId::new(),
        path: "/Photos/".into(),
        name: "Photos link".into(),
        token: "abc123".into(),
        url: Some(format!("{BASE_URL}/s/abc123")),
        permissions: SharePermissions(permissions),
        is_password_protected: protected,
        expiration_date_millis: expiration_millis,
        is_folder: true,
    }
}

fn file_name(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
