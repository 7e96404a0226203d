//! CLI administration tool for alias-shortener.
//!
//! Operates directly on the SQLite store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a custom alias
//! cargo run --bin admin -- url save https://example.com --alias ex
//!
//! # Look up an alias
//! cargo run --bin admin -- url get ex
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete ex
//!
//! # Check the database
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required unless `--storage` is given): SQLite database file

use alias_shortener::AppError;
use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::UrlService;
use alias_shortener::domain::repositories::StorageError;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "STORAGE_PATH")]
    storage: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage URL mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL mapping subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL
    Save {
        /// Redirect target
        url: String,

        /// Alias (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the database, create the schema if needed and count rows
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let repository = SqliteUrlRepository::connect(&cli.storage)
        .await
        .with_context(|| format!("Failed to open storage at {}", cli.storage))?;
    let service = UrlService::new(Arc::new(repository));

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service, &cli.storage).await?,
    }

    Ok(())
}

/// Dispatches URL mapping commands.
async fn handle_url_action(action: UrlAction, service: &UrlService) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(service, url, alias).await?,
        UrlAction::Get { alias } => get_url(service, &alias).await?,
        UrlAction::Delete { alias, yes } => delete_url(service, &alias, yes).await?,
    }

    Ok(())
}

/// Stores a URL using the same alias rules as `POST /url`.
async fn save_url(service: &UrlService, url: String, alias: Option<String>) -> Result<()> {
    let request = SaveRequest {
        url: Some(url.clone()),
        alias: alias.clone(),
    };
    if let Err(errors) = request.validate() {
        println!("{} {}", "❌".red(), AppError::from(errors).to_string().red());
        return Ok(());
    }

    match service.shorten(url, alias).await {
        Ok(mapping) => {
            println!("{}", "✅ URL saved".green().bold());
            println!("  ID:    {}", mapping.id.to_string().bright_black());
            println!("  Alias: {}", mapping.alias.cyan().bold());
            println!("  URL:   {}", mapping.url);
        }
        Err(StorageError::AliasConflict) => {
            println!("{}", "❌ Alias already exists".red());
        }
        Err(e) => return Err(e).context("Failed to save url"),
    }

    Ok(())
}

/// Prints the target URL for an alias.
async fn get_url(service: &UrlService, alias: &str) -> Result<()> {
    match service.resolve(alias).await {
        Ok(url) => println!("{} → {}", alias.cyan().bold(), url),
        Err(StorageError::NotFound) => {
            println!("{} {}", "❌ Alias not found:".red(), alias);
        }
        Err(e) => return Err(e).context("Failed to get url"),
    }

    Ok(())
}

/// Deletes an alias after confirmation.
async fn delete_url(service: &UrlService, alias: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.remove(alias).await {
        Ok(()) => println!("{} {}", "✅ Deleted:".green().bold(), alias.cyan()),
        Err(StorageError::NotFound) => {
            println!("{} {}", "❌ Alias not found:".red(), alias);
        }
        Err(e) => return Err(e).context("Failed to delete url"),
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &UrlService, storage: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database...".bright_blue());

            let count = service.count().await.context("Failed to count rows")?;

            println!("{}", "✅ Database is ready".green().bold());
            println!("  Path: {}", storage.cyan());
            println!("  URLs: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}
