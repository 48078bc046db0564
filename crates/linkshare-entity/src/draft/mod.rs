//! Share draft owned by a dialog session.

pub mod model;

pub use model::{ExpirationSelection, ShareDraft};
