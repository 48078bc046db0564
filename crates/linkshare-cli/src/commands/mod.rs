//! CLI command definitions and dispatch.

pub mod config;
pub mod inspect;
pub mod resolve;

use std::path::Path;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use linkshare_core::config::AppConfig;
use linkshare_core::error::AppError;
use linkshare_entity::share::PublicShare;

use crate::output::OutputFormat;

/// linkshare — resolve public link share settings against server capabilities
#[derive(Debug, Parser)]
#[command(name = "linkshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/linkshare")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the share form for a capability set and form selections
    Resolve(resolve::ResolveArgs),
    /// Show how an existing link pre-populates the edit form
    Inspect(inspect::InspectArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Resolve(args) => resolve::execute(args, config, self.format).await,
            Commands::Inspect(args) => inspect::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

/// Read an existing link from a JSON document.
pub(crate) async fn load_share(path: &Path) -> Result<PublicShare, AppError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// The date given on the command line, or the local date.
pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}
