//! CLI administration tool for the shortener service.
//!
//! Manages mappings and the database without going through the HTTP API.
//! Mapping commands use the same validation rules as the service.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin admin -- urls list
//!
//! # Create, inspect, retarget and delete a mapping
//! cargo run --bin admin -- urls create wkp https://www.wikipedia.org
//! cargo run --bin admin -- urls get wkp
//! cargo run --bin admin -- urls update wkp https://en.wikipedia.org
//! cargo run --bin admin -- urls delete wkp
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`), plus
//! `APP_MAX_KEY_LENGTH` / `APP_MAX_URL_LENGTH`.

use shortener::AppError;
use shortener::application::services::MappingService;
use shortener::config::{self, Config};
use shortener::infrastructure::persistence::PgMappingRepository;
use shortener::server::{create_pool, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the shortener service.
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
    /// Manage short URL mappings
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List all mappings, newest first
    List,

    /// Show the target of a key
    Get { key: String },

    /// Create a mapping
    Create { key: String, target: String },

    /// Replace the target of an existing mapping
    Update { key: String, target: String },

    /// Delete a mapping
    Delete {
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = create_pool(&config.database)?;

    let result = match cli.command {
        Commands::Urls { action } => handle_url_action(action, &config, &pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

/// Dispatches mapping management commands.
async fn handle_url_action(action: UrlAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
    let service = MappingService::new(repository, config.validation_limits());

    match action {
        UrlAction::List => list_urls(&service).await,
        UrlAction::Get { key } => get_url(&service, &key).await,
        UrlAction::Create { key, target } => create_url(&service, &key, &target).await,
        UrlAction::Update { key, target } => update_url(&service, &key, &target).await,
        UrlAction::Delete { key, yes } => delete_url(&service, &key, yes).await,
    }
}

/// Converts a service error into a CLI error with its full message.
fn cli_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", e.category(), e)
}

/// Prints every mapping as a table.
async fn list_urls(service: &MappingService) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let mappings = service.list_all().await.map_err(cli_error)?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {}",
            "admin urls create <key> <target>".bright_white()
        );
        return Ok(());
    }

    println!(
        "  {:<24} {:<20} {}",
        "KEY".bright_white().bold(),
        "CREATED".bright_white().bold(),
        "TARGET".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<24} {:<20} {}",
            mapping.key.cyan(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            mapping.target
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn get_url(service: &MappingService, key: &str) -> Result<()> {
    let target = service.lookup(key).await.map_err(cli_error)?;

    println!("  {} → {}", key.cyan(), target.bright_white());

    Ok(())
}

async fn create_url(service: &MappingService, key: &str, target: &str) -> Result<()> {
    let created = service.create(key, target).await.map_err(cli_error)?;

    if !created {
        anyhow::bail!("Key '{}' already exists", key);
    }

    println!("{}", "✅ Mapping created".green().bold());
    println!("  {} → {}", key.cyan(), target.bright_white());

    Ok(())
}

async fn update_url(service: &MappingService, key: &str, target: &str) -> Result<()> {
    let updated = service.update(key, target).await.map_err(cli_error)?;

    if !updated {
        anyhow::bail!("Key '{}' not found", key);
    }

    println!("{}", "✅ Mapping updated".green().bold());
    println!("  {} → {}", key.cyan(), target.bright_white());

    Ok(())
}

/// Deletes a mapping after confirmation.
///
/// # Safety
///
/// - Shows the current target before asking
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_url(service: &MappingService, key: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Mapping".bright_blue().bold());
    println!();

    let target = service.lookup(key).await.map_err(cli_error)?;

    println!("  Key:    {}", key.cyan());
    println!("  Target: {}", target.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if service.delete(key).await.map_err(cli_error)? {
        println!("{}", "✅ Mapping deleted".green().bold());
    } else {
        // Someone else removed it between the lookup and the delete.
        println!("{}", "⚠️  Mapping was already gone".yellow());
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database connection failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Mappings:   {}",
                mappings.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
