//! Show how an existing link pre-populates the edit form.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use linkshare_core::config::AppConfig;
use linkshare_core::error::AppError;
use linkshare_entity::draft::ShareDraft;
use linkshare_entity::share::{PermissionMode, PublicShare};
use linkshare_service::ExpirationCalendar;

use crate::output::{self, OutputFormat};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// JSON document of the existing link
    #[arg(long)]
    pub share: PathBuf,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Edit form initialization derived from a stored link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditFormSummary {
    /// Link name.
    pub name: String,
    /// Raw permission bitmask.
    pub permissions: u32,
    /// Radio option selected for the bitmask.
    pub permission_mode: PermissionMode,
    /// Whether the password switch starts checked.
    pub password_switch: bool,
    /// Whether the expiration switch starts checked.
    pub expiration_switch: bool,
    /// Expiration date as shown in the form.
    pub expiration_value: Option<String>,
}

impl EditFormSummary {
    /// Summarize the draft a link produces.
    pub fn from_share(share: &PublicShare, calendar: &ExpirationCalendar) -> Self {
        let draft = ShareDraft::from_existing(share);
        let expiration_date = draft.expiration.date();
        Self {
            name: draft.name,
            permissions: share.permissions.0,
            permission_mode: draft.permission_mode,
            password_switch: draft.password_switch,
            expiration_switch: expiration_date.is_some(),
            expiration_value: expiration_date.map(|date| calendar.format(date)),
        }
    }
}

/// Execute the inspect command
pub async fn execute(
    args: &InspectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let share = super::load_share(&args.share).await?;
    let calendar = ExpirationCalendar::new(
        super::today_or_local(args.today),
        config.dialog.date_format.clone(),
    )?;
    let summary = EditFormSummary::from_share(&share, &calendar);

    match format {
        OutputFormat::Json => output::print_item(&summary, format),
        OutputFormat::Table => {
            println!("Edit form for '{}':", share.path);
            output::print_kv("Name", &summary.name);
            output::print_kv(
                "Permission",
                &format!("{} (bitmask {})", summary.permission_mode, summary.permissions),
            );
            output::print_kv("Password switch", on_off(summary.password_switch));
            output::print_kv("Expiration switch", on_off(summary.expiration_switch));
            output::print_kv(
                "Expiration date",
                summary.expiration_value.as_deref().unwrap_or("-"),
            );
        }
    }

    Ok(())
}

fn on_off(checked: bool) -> &'static str {
    if checked { "on" } else { "off" }
}
