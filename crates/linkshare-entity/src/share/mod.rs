//! Public link share entities.

pub mod model;
pub mod password;
pub mod permission;

pub use model::{CreatePublicShare, PublicShare, UpdatePublicShare};
pub use password::PasswordUpdate;
pub use permission::{PermissionMode, SharePermissions};
