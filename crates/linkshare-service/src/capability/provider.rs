//! Capability provider trait and a document-backed implementation.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use linkshare_core::error::AppError;
use linkshare_core::result::AppResult;
use linkshare_core::types::AccountId;
use linkshare_entity::capability::ShareCapabilities;

/// Source of the server's sharing capabilities for an account.
///
/// A dialog session calls [`fetch`](Self::fetch) once and treats the
/// answer as immutable for the rest of the session.
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Fetch the sharing capabilities advertised for an account.
    async fn fetch(&self, account_id: AccountId) -> AppResult<ShareCapabilities>;
}

/// Serves a fixed capability set, typically read from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilityProvider {
    capabilities: Option<ShareCapabilities>,
}

impl StaticCapabilityProvider {
    /// Serves the given capabilities to every account.
    pub fn new(capabilities: ShareCapabilities) -> Self {
        Self {
            capabilities: Some(capabilities),
        }
    }

    /// A provider whose every fetch fails.
    pub fn unavailable() -> Self {
        Self { capabilities: None }
    }

    /// Parses a JSON capability document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let capabilities: ShareCapabilities = serde_json::from_str(json)?;
        Ok(Self::new(capabilities))
    }

    /// Reads a JSON capability document from disk.
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                linkshare_core::ErrorKind::Io,
                format!("Failed to read capabilities from {}: {e}", path.display()),
                e,
            )
        })?;

        let provider = Self::from_json(&json)?;
        info!(path = %path.display(), "Loaded capability document");
        Ok(provider)
    }
}

#[async_trait]
impl CapabilityProvider for StaticCapabilityProvider {
    async fn fetch(&self, account_id: AccountId) -> AppResult<ShareCapabilities> {
        debug!(account_id = %account_id, "Fetching share capabilities");
        self.capabilities.clone().ok_or_else(|| {
            AppError::capability_fetch(format!(
                "No sharing capabilities available for account {account_id}"
            ))
        })
    }
}
