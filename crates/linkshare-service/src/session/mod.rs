//! One share dialog session: draft ownership, input handling, and save.

pub mod dialog;
pub mod input;

pub use dialog::{DialogView, ShareDialogSession, ShareTarget};
pub use input::UserInput;
