//! In-memory share store implementing the create/update use cases.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;

use linkshare_core::error::AppError;
use linkshare_core::result::AppResult;
use linkshare_core::types::ShareId;
use linkshare_entity::capability::ShareCapabilities;
use linkshare_entity::share::{
    CreatePublicShare, PasswordUpdate, PermissionMode, PublicShare, UpdatePublicShare,
};

use super::usecase::{ShareCreateUseCase, ShareUpdateUseCase};
use crate::reconciler::rules;

/// A stored link together with its secret.
#[derive(Debug, Clone)]
struct StoredShare {
    share: PublicShare,
    password: Option<String>,
}

/// Keeps public links in memory and validates saves against a capability
/// policy the way a server would.
#[derive(Debug, Default)]
pub struct InMemoryShareStore {
    shares: DashMap<ShareId, StoredShare>,
    base_url: String,
    policy: ShareCapabilities,
}

impl InMemoryShareStore {
    /// Creates an empty store issuing links under `base_url`.
    pub fn new(base_url: impl Into<String>, policy: ShareCapabilities) -> Self {
        Self {
            shares: DashMap::new(),
            base_url: base_url.into(),
            policy,
        }
    }

    /// Seeds the store with a link that already exists on the server.
    ///
    /// Its password is unknown, so a protected link keeps its protection
    /// without a stored secret.
    pub fn insert_existing(&self, share: PublicShare) {
        self.shares.insert(
            share.id,
            StoredShare {
                share,
                password: None,
            },
        );
    }

    /// Looks up a link.
    pub fn get(&self, share_id: ShareId) -> Option<PublicShare> {
        self.shares.get(&share_id).map(|entry| entry.share.clone())
    }

    /// The password a link is protected with.
    pub fn password_of(&self, share_id: ShareId) -> Option<String> {
        self.shares
            .get(&share_id)
            .and_then(|entry| entry.password.clone())
    }

    /// Names of every link on a path.
    pub fn link_names(&self, path: &str) -> Vec<String> {
        self.shares
            .iter()
            .filter(|entry| entry.share.path == path)
            .map(|entry| entry.share.name.clone())
            .collect()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Whether no links are stored.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    fn validate(&self, name: &str, mode: PermissionMode, has_password: bool) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Link name must not be empty"));
        }
        if !has_password && rules::password_enforced(Some(&self.policy), mode) {
            return Err(AppError::validation(format!(
                "A password is required for {mode} links"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ShareCreateUseCase for InMemoryShareStore {
    async fn create(&self, request: CreatePublicShare) -> AppResult<PublicShare> {
        let mode = PermissionMode::from_permissions(request.permissions);
        let password = request.password.filter(|p| !p.is_empty());
        self.validate(&request.name, mode, password.is_some())?;

        let is_folder = request.path.ends_with('/');
        let id = ShareId::new();
        let token = id.into_uuid().simple().to_string();
        let share = PublicShare {
            id,
            path: request.path,
            name: request.name,
            url: Some(format!("{}/s/{token}", self.base_url.trim_end_matches('/'))),
            token,
            permissions: request.permissions,
            is_password_protected: password.is_some(),
            expiration_date_millis: request.expiration_millis.max(0),
            is_folder,
        };

        self.shares.insert(
            id,
            StoredShare {
                share: share.clone(),
                password,
            },
        );

        info!(
            account_id = %request.account_id,
            share_id = %id,
            permission = %mode,
            "Public link created"
        );

        Ok(share)
    }
}

#[async_trait]
impl ShareUpdateUseCase for InMemoryShareStore {
    async fn update(&self, request: UpdatePublicShare) -> AppResult<PublicShare> {
        let mut entry = self
            .shares
            .get_mut(&request.share_id)
            .ok_or_else(|| AppError::not_found("Public link not found"))?;

        let password_changed = request.password.is_change();
        let (protected, password) = match request.password {
            PasswordUpdate::Unchanged => (entry.share.is_password_protected, entry.password.clone()),
            PasswordUpdate::Cleared => (false, None),
            PasswordUpdate::SetTo(password) if !password.is_empty() => (true, Some(password)),
            PasswordUpdate::SetTo(_) => (false, None),
        };

        let mode = PermissionMode::from_permissions(request.permissions);
        self.validate(&request.name, mode, protected)?;

        entry.share.name = request.name;
        entry.share.permissions = request.permissions;
        entry.share.is_password_protected = protected;
        entry.password = password;
        if request.expiration_millis > 0 {
            entry.share.expiration_date_millis = request.expiration_millis;
        } else if request.expiration_millis < 0 {
            entry.share.expiration_date_millis = 0;
        }

        info!(
            account_id = %request.account_id,
            share_id = %request.share_id,
            permission = %mode,
            password_changed,
            "Public link updated"
        );

        Ok(entry.share.clone())
    }
}
