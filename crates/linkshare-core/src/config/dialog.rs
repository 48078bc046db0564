//! Share dialog presentation configuration.

use serde::{Deserialize, Serialize};

/// Locale-dependent strings and formats used by the share dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// `chrono` format string for expiration dates shown in the form.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Explanation shown when the server enforces an expiration date.
    /// `{days}` is replaced by the enforced day count.
    #[serde(default = "default_enforced_expiration_template")]
    pub enforced_expiration_template: String,
    /// Default name of a new link. `{file}` is replaced by the file name.
    #[serde(default = "default_link_name_template")]
    pub link_name_template: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            enforced_expiration_template: default_enforced_expiration_template(),
            link_name_template: default_link_name_template(),
        }
    }
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_enforced_expiration_template() -> String {
    "The server enforces an expiration date of {days} days for public links".to_string()
}

fn default_link_name_template() -> String {
    "{file} link".to_string()
}
