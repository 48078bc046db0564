//! Resolved form state handed to the rendering layer.

pub mod password_field;
pub mod state;

pub use password_field::PasswordFieldPresentation;
pub use state::{PasswordLabel, ResolvedUiState, SwitchState};
