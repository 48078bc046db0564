//! # linkshare-service
//!
//! Public link share settings logic. The [`ShareSettingsReconciler`] turns
//! a share draft and the server's capability set into the resolved form
//! state; the [`ShareDialogSession`] owns one dialog's draft, feeds user
//! input and capability arrival through the reconciler, and hands the
//! result to the create/update use cases on save.
//!
//! Collaborators follow constructor injection: capability providers and
//! share use cases are passed in as trait objects.

pub mod calendar;
pub mod capability;
pub mod reconciler;
pub mod session;
pub mod share;

pub use calendar::ExpirationCalendar;
pub use capability::{CapabilityProvider, StaticCapabilityProvider};
pub use reconciler::ShareSettingsReconciler;
pub use session::{DialogView, ShareDialogSession, ShareTarget, UserInput};
pub use share::{InMemoryShareStore, ShareCreateUseCase, ShareUpdateUseCase};
