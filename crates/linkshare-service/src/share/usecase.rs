//! Create and update use cases invoked when a dialog is saved.

use async_trait::async_trait;

use linkshare_core::result::AppResult;
use linkshare_entity::share::{CreatePublicShare, PublicShare, UpdatePublicShare};

/// Creates a public link on the server.
#[async_trait]
pub trait ShareCreateUseCase: Send + Sync {
    /// Create the link and return the server's record of it.
    async fn create(&self, request: CreatePublicShare) -> AppResult<PublicShare>;
}

/// Updates an existing public link on the server.
#[async_trait]
pub trait ShareUpdateUseCase: Send + Sync {
    /// Apply the update and return the server's record of the link.
    async fn update(&self, request: UpdatePublicShare) -> AppResult<PublicShare>;
}
