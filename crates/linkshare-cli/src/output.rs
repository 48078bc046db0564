//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use linkshare_entity::ui::{PasswordLabel, ResolvedUiState, SwitchState};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One form control as printed in table mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ControlRow {
    /// Control name.
    pub control: String,
    /// Whether it is shown.
    pub visible: bool,
    /// Its value or checked state.
    pub value: String,
}

impl ControlRow {
    fn new(control: &str, visible: bool, value: impl Into<String>) -> Self {
        Self {
            control: control.to_string(),
            visible,
            value: value.into(),
        }
    }

    fn switch(control: &str, switch: SwitchState) -> Self {
        Self::new(control, switch.visible, if switch.checked { "on" } else { "off" })
    }
}

/// Flatten a resolved form into table rows.
pub fn control_rows(ui: &ResolvedUiState) -> Vec<ControlRow> {
    let password_caption = match ui.password_label {
        PasswordLabel::Optional => "optional",
        PasswordLabel::Enforced => "enforced",
    };

    vec![
        ControlRow::new(
            "permission",
            ui.permission_group_visible,
            ui.selected_permission.as_str(),
        ),
        ControlRow::new(
            "upload-only option",
            ui.upload_only_option_visible,
            "",
        ),
        ControlRow::switch("password switch", ui.password_switch),
        ControlRow::new("password field", ui.password_field_visible, password_caption),
        ControlRow::new(
            "password placeholder",
            ui.password_placeholder_visible,
            "",
        ),
        ControlRow::switch("expiration switch", ui.expiration_switch),
        ControlRow::new(
            "expiration date",
            ui.expiration_value.is_some(),
            ui.expiration_value.clone().unwrap_or_default(),
        ),
        ControlRow::new(
            "expiration explanation",
            ui.expiration_explanation.is_some(),
            ui.expiration_explanation.clone().unwrap_or_default(),
        ),
    ]
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
