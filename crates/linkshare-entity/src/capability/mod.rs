//! Server capability entities.

pub mod model;
pub mod version;

pub use model::{CapabilityState, ShareCapabilities};
pub use version::ServerVersion;
