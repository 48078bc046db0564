//! Run a share dialog session from the command line.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use linkshare_core::config::AppConfig;
use linkshare_core::error::AppError;
use linkshare_core::types::AccountId;
use linkshare_entity::share::PermissionMode;
use linkshare_service::{
    CapabilityProvider, InMemoryShareStore, ShareDialogSession, ShareTarget,
    StaticCapabilityProvider, UserInput,
};

use crate::output::{self, OutputFormat};

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// JSON capability document (defaults to `capabilities.file` from config)
    #[arg(long)]
    pub capabilities: Option<PathBuf>,

    /// JSON document of an existing link to edit
    #[arg(long)]
    pub share: Option<PathBuf>,

    /// Remote path of the resource to share; folder paths end with `/`
    #[arg(long, default_value = "/")]
    pub path: String,

    /// The resource is a folder
    #[arg(long)]
    pub folder: bool,

    /// Selected permission: read-only, read-write, upload-only
    #[arg(long)]
    pub mode: Option<PermissionMode>,

    /// Turn the password switch on and type this password
    #[arg(long)]
    pub password: Option<String>,

    /// Type this text into the expiration field
    #[arg(long, conflicts_with = "no_expiration")]
    pub expires: Option<String>,

    /// Turn the expiration switch off
    #[arg(long)]
    pub no_expiration: bool,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Save the link to an in-memory store using the capabilities as server policy
    #[arg(long)]
    pub save: bool,
}

/// Execute the resolve command
pub async fn execute(
    args: &ResolveArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let provider = capability_provider(args, config).await?;
    let account_id = AccountId::new();
    let today = super::today_or_local(args.today);

    let existing = match &args.share {
        Some(path) => Some(super::load_share(path).await?),
        None => None,
    };

    let mut session = match &existing {
        Some(share) => ShareDialogSession::edit_share(account_id, share, &config.dialog, today)?,
        None => {
            let target = ShareTarget {
                account_id,
                path: args.path.clone(),
                file_name: file_name(&args.path),
                is_folder: args.folder,
                existing_link_names: Vec::new(),
            };
            ShareDialogSession::new_share(target, &config.dialog, today)?
        }
    };

    session.load_capabilities(&provider).await;

    for input in inputs(args) {
        debug!(?input, "Applying form input");
        session.apply(input);
    }

    if args.save {
        let policy = provider.fetch(account_id).await.unwrap_or_default();
        let store = InMemoryShareStore::new("https://cloud.example.com", policy);
        if let Some(share) = existing {
            store.insert_existing(share);
        }
        match session.save(&store, &store).await {
            Ok(share) => {
                output::print_success(&format!("Saved public link '{}'", share.name));
                output::print_item(&share, format);
            }
            Err(e) => output::print_error(&e.user_message()),
        }
    }

    let view = session.view();
    match format {
        OutputFormat::Table => output::print_list(&output::control_rows(&view.ui), format),
        OutputFormat::Json => output::print_item(&view, format),
    }

    Ok(())
}

async fn capability_provider(
    args: &ResolveArgs,
    config: &AppConfig,
) -> Result<StaticCapabilityProvider, AppError> {
    let path = args
        .capabilities
        .clone()
        .or_else(|| config.capabilities.file.as_ref().map(PathBuf::from));

    match path {
        Some(path) => StaticCapabilityProvider::from_file(path).await,
        None => Ok(StaticCapabilityProvider::unavailable()),
    }
}

/// Translate command line options into the inputs a user would make.
fn inputs(args: &ResolveArgs) -> Vec<UserInput> {
    let mut inputs = Vec::new();
    if let Some(mode) = args.mode {
        inputs.push(UserInput::SelectPermission(mode));
    }
    if let Some(password) = &args.password {
        inputs.push(UserInput::SetPasswordSwitch(true));
        inputs.push(UserInput::SetPassword(password.clone()));
    }
    if let Some(text) = &args.expires {
        inputs.push(UserInput::SetExpirationText(text.clone()));
    }
    if args.no_expiration {
        inputs.push(UserInput::SetExpirationSwitch(false));
    }
    inputs
}

fn file_name(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("/")
        .to_string()
}
