//! Masking of the password input.

use serde::{Deserialize, Serialize};

/// Presentation-only state of the password input.
///
/// The mask toggle is offered only while the field has focus; losing
/// focus always masks the input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordFieldPresentation {
    focused: bool,
    masked: bool,
}

impl Default for PasswordFieldPresentation {
    fn default() -> Self {
        Self {
            focused: false,
            masked: true,
        }
    }
}

impl PasswordFieldPresentation {
    /// Record a focus change.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.masked = true;
        }
    }

    /// Flip between masked and plain text. Ignored without focus.
    pub fn toggle_mask(&mut self) {
        if self.focused {
            self.masked = !self.masked;
        }
    }

    /// Whether the input shows dots.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Whether the show/hide affordance is displayed.
    pub fn toggle_visible(&self) -> bool {
        self.focused
    }
}
