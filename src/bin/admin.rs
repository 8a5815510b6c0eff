//! CLI administration tool for cvr-insight.
//!
//! Provides commands for managing dashboard accounts and performing
//! database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a dashboard account
//! cargo run --bin admin -- user create
//!
//! # List all accounts
//! cargo run --bin admin -- user list
//!
//! # Delete an account
//! cargo run --bin admin -- user delete inger
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite store location, defaults to
//!   `sqlite:cvr_database.db`
//!
//! # Features
//!
//! - **Account Management**: Create, list, and delete dashboard users
//! - **Statistics**: Company, financial-record, and user counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Hidden password entry with confirmation
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use cvr_insight::application::services::AuthService;
use cvr_insight::domain::entities::NewUser;
use cvr_insight::domain::repositories::UserRepository;
use cvr_insight::domain::sectors;
use cvr_insight::infrastructure::persistence::SqliteUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing cvr-insight.
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
    /// Manage dashboard accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new dashboard account
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,

        /// Sector names of interest (repeatable)
        #[arg(short, long)]
        sector: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Delete an account
    Delete {
        /// Username to delete
        username: String,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:cvr_database.db".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            sector,
            yes,
        } => {
            create_user(repo, username, sector, yes).await?;
        }
        UserAction::List => {
            list_users(pool).await?;
        }
        UserAction::Delete { username } => {
            delete_user(pool, username).await?;
        }
    }

    Ok(())
}

/// Creates a dashboard account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided)
/// 2. Prompt for password with hidden input and confirmation
/// 3. Validate any sector names against the known sector list
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash the password with PBKDF2 and store the account
async fn create_user(
    repo: Arc<SqliteUserRepository>,
    username: Option<String>,
    sector_names: Vec<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create dashboard account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password: String = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    for name in &sector_names {
        if sectors::code_for_name(name).is_err() {
            anyhow::bail!("Unknown sector name: {name}");
        }
    }

    println!();
    println!("  Username: {}", username.cyan());
    if sector_names.is_empty() {
        println!("  Sectors:  {}", "(none)".bright_black());
    } else {
        println!("  Sectors:  {}", sector_names.join(", ").cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let new_user = NewUser {
        username,
        password_hash: AuthService::<SqliteUserRepository>::hash_password(&password),
        sectors: sector_names,
    };

    let user = repo
        .create(new_user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {:?}", e))?;

    println!();
    println!(
        "{} {}",
        "Account created:".green().bold(),
        user.username.cyan()
    );
    println!();

    Ok(())
}

/// Lists all dashboard accounts.
///
/// # Output Format
///
/// ```text
/// Dashboard accounts
///
///   Username                       Created              Sectors
///   ─────────────────────────────────────────────────────────────────────────
///   inger                          2026-01-15 10:30     Manufacturing
/// ```
async fn list_users(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Dashboard accounts".bright_blue().bold());
    println!();

    let rows: Vec<(String, String, Option<String>)> =
        sqlx::query_as("SELECT username, created_at, sectors FROM users ORDER BY username")
            .fetch_all(pool)
            .await?;

    if rows.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<30} {:<25} {}",
        "Username".bright_white().bold(),
        "Created".bright_white().bold(),
        "Sectors".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (username, created_at, sectors) in &rows {
        println!(
            "  {:<30} {:<25} {}",
            username.cyan(),
            created_at.bright_black(),
            sectors.as_deref().unwrap_or("").bright_black()
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes an account by username with confirmation prompt.
async fn delete_user(pool: &SqlitePool, username: String) -> Result<()> {
    println!("{}", "Delete dashboard account".bright_blue().bold());
    println!();

    let exists: Option<(String,)> =
        sqlx::query_as("SELECT username FROM users WHERE username = ?")
            .bind(&username)
            .fetch_optional(pool)
            .await?;

    if exists.is_none() {
        anyhow::bail!("Account not found: {username}");
    }

    println!("  Username: {}", username.cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this account?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    sqlx::query("DELETE FROM users WHERE username = ?")
        .bind(&username)
        .execute(pool)
        .await?;

    println!();
    println!("{}", "Account deleted".green().bold());
    println!();

    Ok(())
}

/// Displays store statistics.
///
/// Shows:
/// - Number of companies
/// - Number of financial records and the year span they cover
/// - Number of dashboard accounts
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let companies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company")
        .fetch_one(pool)
        .await?;

    let financials: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM financials")
        .fetch_one(pool)
        .await?;

    let (min_year, max_year): (Option<i64>, Option<i64>) =
        sqlx::query_as("SELECT MIN(year), MAX(year) FROM financials")
            .fetch_one(pool)
            .await?;

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Companies:         {}",
        companies.to_string().bright_green().bold()
    );
    println!(
        "  Financial records: {}",
        financials.to_string().bright_green().bold()
    );
    if let (Some(min), Some(max)) = (min_year, max_year) {
        println!(
            "  Year span:         {}",
            format!("{min}-{max}").bright_green().bold()
        );
    }
    println!(
        "  Accounts:          {}",
        users.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
