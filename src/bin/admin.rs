//! CLI administration tool for url-registry.
//!
//! Works directly on the SQLite database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check the database and apply migrations
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//!
//! # Manage short codes
//! cargo run --bin admin -- link create example.com/docs
//! cargo run --bin admin -- link show Zx9_aQ
//! cargo run --bin admin -- link update Zx9_aQ https://example.com/new
//! cargo run --bin admin -- link delete Zx9_aQ
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default `sqlite://urls.db`)
//! - `MAX_CREATE_ATTEMPTS`, `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT`

use url_registry::application::services::UrlRegistry;
use url_registry::config::{self, Config};
use url_registry::domain::RegistryError;
use url_registry::infrastructure::persistence::{self, SqliteUrlRepository};
use url_registry::utils::code_generator::RandomCodeGenerator;
use url_registry::utils::timestamp;
use url_registry::utils::url_validator::validate_url;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

type Registry = UrlRegistry<SqliteUrlRepository>;

/// CLI tool for managing url-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short codes
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short code subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create { url: String },

    /// Show the record behind a code
    Show { code: String },

    /// Point a code at a new URL
    Update { code: String, url: String },

    /// Delete a code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply migrations
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let registry = UrlRegistry::with_generator(
        repository,
        Arc::new(RandomCodeGenerator),
        config.max_create_attempts,
    );

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &registry).await?,
        Commands::Db { action } => handle_db_action(action, &registry, &pool, &config).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches short code commands.
async fn handle_link_action(action: LinkAction, registry: &Registry) -> Result<()> {
    match action {
        LinkAction::Create { url } => create_link(registry, &url).await,
        LinkAction::Show { code } => show_link(registry, &code).await,
        LinkAction::Update { code, url } => update_link(registry, &code, &url).await,
        LinkAction::Delete { code, yes } => delete_link(registry, &code, yes).await,
    }
}

async fn create_link(registry: &Registry, input: &str) -> Result<()> {
    let url = validate_url(input).map_err(RegistryError::from)?;
    let code = registry.create(&url).await?;

    println!("{}", "✅ Short code created".green().bold());
    println!("  Code: {}", code.bright_yellow().bold());
    println!("  URL:  {}", url.cyan());

    Ok(())
}

/// Prints every field of a record.
///
/// # Output Format
///
/// ```text
///   ID:       1
///   Code:     Zx9_aQ
///   URL:      https://example.com/
///   Created:  2024-05-01T10:00:00Z
///   Updated:  2024-05-01T10:05:00Z (modified)
/// ```
async fn show_link(registry: &Registry, code: &str) -> Result<()> {
    let record = match registry.get(code).await {
        Ok(record) => record,
        Err(RegistryError::NotFound { .. }) => {
            println!("{}", format!("Short code '{code}' not found").yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  ID:       {}", record.id.to_string().bright_black());
    println!("  Code:     {}", record.short_code.bright_yellow());
    println!("  URL:      {}", record.url.cyan());
    println!(
        "  Created:  {}",
        timestamp::format(record.created_at).bright_black()
    );

    let updated = timestamp::format(record.updated_at);
    if record.is_modified() {
        println!("  Updated:  {} {}", updated.bright_black(), "(modified)".yellow());
    } else {
        println!("  Updated:  {}", updated.bright_black());
    }

    Ok(())
}

async fn update_link(registry: &Registry, code: &str, input: &str) -> Result<()> {
    let url = validate_url(input).map_err(RegistryError::from)?;
    let record = registry.update(code, &url).await?;

    println!("{}", "✅ Short code updated".green().bold());
    println!("  Code: {}", record.short_code.bright_yellow());
    println!("  URL:  {}", record.url.cyan());

    Ok(())
}

/// Deletes a code after confirmation (default: No).
async fn delete_link(registry: &Registry, code: &str, skip_confirm: bool) -> Result<()> {
    let record = registry.get(code).await?;

    println!("  Code: {}", record.short_code.bright_yellow());
    println!("  URL:  {}", record.url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short code?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    registry.delete(code).await?;
    println!("{}", "✅ Short code deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    registry: &Registry,
    pool: &SqlitePool,
    config: &Config,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK, migrations applied".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let count = registry.count().await?;

            println!("  Database: {}", config.database_url.bright_white());
            println!("  SQLite:   {}", version.bright_white());
            println!("  Records:  {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
