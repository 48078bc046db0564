//! Configuration management commands.

use clap::{Args, Subcommand};

use linkshare_core::config::AppConfig;
use linkshare_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_item(config, format),
            OutputFormat::Table => {
                println!("Effective configuration:");
                output::print_kv("logging.level", &config.logging.level);
                output::print_kv("logging.format", &config.logging.format);
                output::print_kv("dialog.date_format", &config.dialog.date_format);
                output::print_kv(
                    "dialog.enforced_expiration_template",
                    &config.dialog.enforced_expiration_template,
                );
                output::print_kv("dialog.link_name_template", &config.dialog.link_name_template);
                output::print_kv(
                    "capabilities.file",
                    config.capabilities.file.as_deref().unwrap_or("-"),
                );
            }
        },
    }

    Ok(())
}
