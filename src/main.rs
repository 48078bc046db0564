//! linkshare — public link share settings from the command line.
//!
//! Loads configuration, sets up logging and dispatches to the CLI commands.

use clap::Parser;

use linkshare_cli::Cli;
use linkshare_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    linkshare_cli::logging::init_logging(&config.logging);

    tracing::debug!(config = %cli.config, "Configuration loaded");

    if let Err(e) = cli.execute(&config).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
