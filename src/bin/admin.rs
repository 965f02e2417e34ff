//! CLI administration tool for user-cache-service.
//!
//! Inspects the user store and the lookaside cache without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users in the store
//! cargo run --bin admin -- users list
//!
//! # Show one user
//! cargo run --bin admin -- users show 42
//!
//! # List cached user keys
//! cargo run --bin admin -- cache keys
//!
//! # Drop every cached user entry
//! cargo run --bin admin -- cache flush
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `user_cache_service::config`).
//! Cache commands require `REDIS_URL` or `REDIS_HOST`.

use user_cache_service::config::{Config, mask_connection_string};
use user_cache_service::domain::repositories::UserRepository;
use user_cache_service::infrastructure::cache::keys::USER_KEY_PREFIX;
use user_cache_service::infrastructure::cache::{CacheService, RedisCache};
use user_cache_service::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-cache-service.
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
    /// Inspect stored users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect or clear the user cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User inspection subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Show a single user
    Show {
        /// User id
        id: i32,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// List cached user keys
    Keys,

    /// Delete every cached user entry
    Flush {
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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Users { action } => {
            let pool = connect_database(&config).await?;
            let repo = PgUserRepository::new(Arc::new(pool));
            handle_user_action(action, &repo).await?
        }
        Commands::Cache { action } => {
            let cache = connect_cache(&config).await?;
            handle_cache_action(action, &cache).await?
        }
        Commands::Db { action } => {
            let pool = connect_database(&config).await?;
            handle_db_action(action, &pool).await?
        }
    }

    Ok(())
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn connect_cache(config: &Config) -> Result<RedisCache> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set for cache commands")?;

    RedisCache::connect(redis_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(redis_url)))
}

/// Dispatches user inspection commands.
async fn handle_user_action(action: UserAction, repo: &PgUserRepository) -> Result<()> {
    match action {
        UserAction::List => list_users(repo).await,
        UserAction::Show { id } => show_user(repo, id).await,
    }
}

/// Lists all users in the store.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID    First name           Last name            Age
///   ───────────────────────────────────────────────────────
///   1     Ada                  Lovelace             36
/// ```
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<20} {}",
        "ID".bright_white().bold(),
        "First name".bright_white().bold(),
        "Last name".bright_white().bold(),
        "Age".bright_white().bold()
    );
    println!("  {}", "─".repeat(55).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<20} {:<20} {}",
            user.id.to_string().bright_black(),
            user.first_name.cyan(),
            user.last_name.cyan(),
            user.age
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints a single user straight from the store, bypassing the cache.
async fn show_user(repo: &PgUserRepository, id: i32) -> Result<()> {
    let user = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("User {} not found", id))?;

    println!("{}", "User".bright_blue().bold());
    println!();
    println!("  ID:         {}", user.id.to_string().bright_black());
    println!("  First name: {}", user.first_name.cyan());
    println!("  Last name:  {}", user.last_name.cyan());
    println!("  Age:        {}", user.age);
    println!();

    Ok(())
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, cache: &RedisCache) -> Result<()> {
    match action {
        CacheAction::Keys => list_cache_keys(cache).await,
        CacheAction::Flush { yes } => flush_cache(cache, yes).await,
    }
}

/// Lists every cached user key.
async fn list_cache_keys(cache: &RedisCache) -> Result<()> {
    println!("{}", "Cached users".bright_blue().bold());
    println!();

    let mut keys = cache
        .scan_prefix(USER_KEY_PREFIX)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to scan cache: {}", e))?;
    keys.sort();

    if keys.is_empty() {
        println!("{}", "  Cache is empty".yellow());
        return Ok(());
    }

    for key in &keys {
        println!("  {}", key.cyan());
    }

    println!();
    println!("  Total: {}", keys.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes every cached user entry after confirmation.
///
/// The store is untouched; subsequent reads repopulate the cache on miss.
async fn flush_cache(cache: &RedisCache, skip_confirm: bool) -> Result<()> {
    println!("{}", "Flush user cache".bright_blue().bold());
    println!();

    let keys = cache
        .scan_prefix(USER_KEY_PREFIX)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to scan cache: {}", e))?;

    if keys.is_empty() {
        println!("{}", "  Cache is already empty".yellow());
        return Ok(());
    }

    println!("  Entries: {}", keys.len().to_string().bright_white().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete these cache entries?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    for key in &keys {
        cache
            .delete(key)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", key, e))?;
    }

    println!();
    println!("{}", "Cache flushed".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Connected, but the users table is missing (run `sqlx migrate run`)")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Users: {}", users.to_string().bright_green().bold());
        }
    }

    Ok(())
}
