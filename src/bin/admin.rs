//! CLI administration tool for qr-shortener.
//!
//! Inspects and deletes short URLs and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a short URL with its reachability and click summary
//! cargo run --bin admin -- link show 0f115db0
//!
//! # Delete a short URL
//! cargo run --bin admin -- link delete 0f115db0
//!
//! # Record and click counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `REDIS_URL` (optional): QR image store, cleared on delete

use qr_shortener::application::services::{ClickService, ShortUrlService};
use qr_shortener::config::mask_connection_string;
use qr_shortener::domain::repositories::ShortUrlRepository;
use qr_shortener::error::AppError;
use qr_shortener::infrastructure::cache::RedisQrStore;
use qr_shortener::infrastructure::persistence::{PgClickRepository, PgShortUrlRepository};
use qr_shortener::utils::{HttpUrlValidator, Sha256KeyHasher};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing qr-shortener.
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
    /// Inspect or delete short URLs
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show record and click counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show a short URL
    Show {
        /// Key (hash or alias)
        key: String,
    },

    /// Delete a short URL
    Delete {
        /// Key (hash or alias)
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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short URL commands.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let pool = Arc::new(pool);
    let short_urls = Arc::new(PgShortUrlRepository::new(pool.clone()));

    match action {
        LinkAction::Show { key } => {
            let clicks = Arc::new(PgClickRepository::new(pool));
            show_link(short_urls, clicks, &key).await?;
        }
        LinkAction::Delete { key, yes } => {
            delete_link(short_urls, &key, yes).await?;
        }
    }

    Ok(())
}

/// Prints a record, its reachability and its click breakdown.
async fn show_link(
    short_urls: Arc<PgShortUrlRepository>,
    clicks: Arc<PgClickRepository>,
    key: &str,
) -> Result<()> {
    let Some(record) = short_urls.find_by_key(key).await? else {
        println!("{} {}", "Not found:".yellow(), key);
        return Ok(());
    };

    let summary = ClickService::new(short_urls, clicks).summary(key).await?;

    let reachability = match record.reachability_status {
        Some(status) if record.is_reachable() => status.to_string().green(),
        Some(status) => status.to_string().red(),
        None => "pending".bright_black(),
    };

    println!("{}", "🔗 Short URL".bright_blue().bold());
    println!();
    println!("  Key:          {}", record.key.cyan());
    println!("  Target:       {}", record.target_url.bright_white());
    println!(
        "  Sponsor:      {}",
        record.sponsor.as_deref().unwrap_or("-")
    );
    println!("  Creator IP:   {}", record.ip.as_deref().unwrap_or("-"));
    println!(
        "  QR:           {}",
        if record.qr_enabled { "yes" } else { "no" }
    );
    println!("  Reachability: {}", reachability);
    println!(
        "  Clicks:       {}",
        summary.total.to_string().bright_green().bold()
    );

    for (browser, count) in &summary.browsers {
        println!("    {:<20} {}", browser, count);
    }
    for (platform, count) in &summary.platforms {
        println!("    {:<20} {}", platform.bright_black(), count);
    }
    println!();

    Ok(())
}

/// Deletes a record after confirmation (default: No).
async fn delete_link(short_urls: Arc<PgShortUrlRepository>, key: &str, yes: bool) -> Result<()> {
    let Some(record) = short_urls.find_by_key(key).await? else {
        println!("{} {}", "Not found:".yellow(), key);
        return Ok(());
    };

    println!("  Key:    {}", record.key.cyan());
    println!("  Target: {}", record.target_url.bright_white());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let mut service = ShortUrlService::new(
        short_urls,
        Arc::new(HttpUrlValidator),
        Arc::new(Sha256KeyHasher),
    );

    if let Ok(redis_url) = std::env::var("REDIS_URL") {
        let store = RedisQrStore::connect(&redis_url)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to Redis at {}",
                    mask_connection_string(&redis_url)
                )
            })?;
        service = service.with_qr_store(Arc::new(store));
    }

    match service.delete(key).await {
        Ok(()) => println!("{}", "✅ Deleted".green().bold()),
        Err(AppError::NotFound { .. }) => println!("{}", "Already deleted".yellow()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Displays record and click counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
        .fetch_one(pool)
        .await?;

    let with_qr: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls WHERE qr_enabled")
        .fetch_one(pool)
        .await?;

    let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short URLs: {}",
        records.to_string().bright_green().bold()
    );
    println!("  With QR:    {}", with_qr.to_string().bright_green().bold());
    println!("  Clicks:     {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
