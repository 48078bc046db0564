//! Server capability retrieval.

pub mod provider;

pub use provider::{CapabilityProvider, StaticCapabilityProvider};
