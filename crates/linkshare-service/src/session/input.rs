//! User-initiated form changes.

use chrono::NaiveDate;

use linkshare_entity::share::PermissionMode;

/// A change made by the user in the share form.
///
/// Only user actions travel through this type; resolved state flows back
/// to the form through [`DialogView`](super::DialogView) and never
/// re-enters the session as input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// A permission radio option was selected.
    SelectPermission(PermissionMode),
    /// The link name was edited.
    SetName(String),
    /// The password text was edited.
    SetPassword(String),
    /// The password switch was flipped.
    SetPasswordSwitch(bool),
    /// The expiration switch was flipped.
    SetExpirationSwitch(bool),
    /// A date was chosen in the date picker.
    PickExpirationDate(NaiveDate),
    /// The expiration text field was edited directly.
    SetExpirationText(String),
    /// The password field gained or lost focus.
    FocusPassword(bool),
    /// The show/hide password affordance was tapped.
    TogglePasswordMask,
}
