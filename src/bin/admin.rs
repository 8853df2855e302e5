//! CLI administration tool for alias-shortener.
//!
//! Manages aliases and checks the database directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an alias (random when --alias is omitted)
//! cargo run --bin admin -- alias create https://example.com --owner alice
//!
//! # Show where an alias points
//! cargo run --bin admin -- alias resolve docs
//!
//! # Delete an alias owned by alice
//! cargo run --bin admin -- alias delete docs --owner alice
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use alias_shortener::application::services::AliasService;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::PgAliasRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
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
    /// Manage aliases
    Alias {
        #[command(subcommand)]
        action: AliasAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum AliasAction {
    /// Create a new alias
    Create {
        /// Destination URL
        url: String,

        /// Alias to use (random when omitted)
        #[arg(short, long)]
        alias: Option<String>,

        /// Owner label
        #[arg(short, long)]
        owner: String,
    },

    /// Show the mapping stored for an alias
    Resolve {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Owner label; must match the stored owner
        #[arg(short, long)]
        owner: String,

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

    /// Create the alias table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(PgAliasRepository::new(Arc::new(pool.clone())));

    let result = match cli.command {
        Commands::Alias { action } => handle_alias_action(action, repository).await,
        Commands::Db { action } => handle_db_action(action, repository).await,
    };

    pool.close().await;
    result
}

/// Dispatches alias management commands.
async fn handle_alias_action(
    action: AliasAction,
    repository: Arc<PgAliasRepository>,
) -> Result<()> {
    let service = AliasService::new(repository);

    match action {
        AliasAction::Create { url, alias, owner } => {
            let alias = service.save(&url, alias.as_deref(), &owner).await?;

            println!("{}", "✓ Alias created".green().bold());
            println!("  {} {}", "Alias:".bold(), alias.cyan());
            println!("  {} {}", "URL:".bold(), url);
            println!("  {} {}", "Owner:".bold(), owner);
        }
        AliasAction::Resolve { alias } => {
            let mapping = service.describe(&alias).await?;

            println!("  {} {}", "ID:".bold(), mapping.id);
            println!("  {} {}", "Alias:".bold(), mapping.alias.cyan());
            println!("  {} {}", "URL:".bold(), mapping.destination);
            println!("  {} {}", "Owner:".bold(), mapping.owner);
        }
        AliasAction::Delete { alias, owner, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete alias '{}' owned by '{}'?", alias, owner))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            service.delete(&alias, &owner).await?;
            println!("{} {}", "✓ Alias deleted:".green().bold(), alias);
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repository: Arc<PgAliasRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            repository.ping().await?;
            println!("{}", "✓ Database connection OK".green().bold());
        }
        DbAction::Init => {
            repository.ensure_schema().await?;
            println!("{}", "✓ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
