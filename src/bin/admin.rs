//! CLI administration tool for visualist.
//!
//! Provides commands for inspecting the page tree, publishing and deleting
//! pages, and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print the page tree
//! cargo run --bin admin -- page tree
//!
//! # Create an index page under the root
//! cargo run --bin admin -- page create-index --kind person_index --parent 1 --title People
//!
//! # Publish or take down a page
//! cargo run --bin admin -- page publish 12
//! cargo run --bin admin -- page unpublish 12
//!
//! # Delete a page and its subtree
//! cargo run --bin admin -- page delete 12
//!
//! # List snippet kinds and content counts
//! cargo run --bin admin -- snippets
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use visualist::application::services::CreatePage;
use visualist::domain::entities::PageKind;
use visualist::domain::registry::SnippetRegistry;
use visualist::infrastructure::persistence::{
    PgPageRepository, PgRecordRepository, PgSnippetRepository,
};
use visualist::state::{AppState, DEFAULT_SITE_NAME};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing visualist.
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
    /// Manage pages
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// List registered snippet kinds
    Snippets,

    /// Show content counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Page subcommands.
#[derive(Subcommand)]
enum PageAction {
    /// Print the page tree
    Tree,

    /// Create an index or tag index page
    CreateIndex {
        /// Page kind (e.g., "person_index", "event_tag_index")
        #[arg(short, long)]
        kind: String,

        /// Parent page id
        #[arg(short, long)]
        parent: i64,

        /// Page title (prompted if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Slug (derived from the title if omitted)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Publish a page
    Publish {
        id: i64,

        /// Publication time in RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// Take a page offline
    Unpublish { id: i64 },

    /// Delete a page and everything below it
    Delete {
        id: i64,

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
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Page { action } => handle_page_action(action, &pool).await?,
        Commands::Snippets => list_snippet_kinds(),
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn services(pool: &PgPool) -> AppState {
    let pool = Arc::new(pool.clone());
    AppState::new(
        Arc::new(PgPageRepository::new(pool.clone())),
        Arc::new(PgRecordRepository::new(pool.clone())),
        Arc::new(PgSnippetRepository::new(pool)),
        SnippetRegistry::standard(),
        DEFAULT_SITE_NAME,
    )
}

/// Dispatches page commands.
async fn handle_page_action(action: PageAction, pool: &PgPool) -> Result<()> {
    let state = services(pool);
    let pages = &state.page_service;

    match action {
        PageAction::Tree => {
            println!("{}", "🌳 Page tree".bright_blue().bold());
            println!();

            for page in pages.list_pages().await? {
                let indent = "  ".repeat(page.depth.max(0) as usize);
                let status = if page.is_visible_at(Utc::now()) {
                    "live".green()
                } else if page.live {
                    "scheduled".yellow()
                } else {
                    "draft".bright_black()
                };
                println!(
                    "{}{} {} {} [{}]",
                    indent,
                    page.id.to_string().bright_black(),
                    page.title.cyan(),
                    page.url_path.bright_white(),
                    status
                );
            }
            println!();
        }
        PageAction::CreateIndex {
            kind,
            parent,
            title,
            slug,
        } => {
            let kind: PageKind = kind.parse().map_err(anyhow::Error::msg)?;

            let title = match title {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Title")
                    .with_initial_text(kind.verbose_name_plural())
                    .interact_text()?,
            };

            let page = pages
                .create_page(CreatePage {
                    kind,
                    parent_id: parent,
                    title,
                    slug,
                    intro: None,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create page: {}", e))?;

            println!("{}", "✅ Page created".green().bold());
            println!("  ID:   {}", page.id.to_string().bright_white());
            println!("  Path: {}", page.url_path.cyan());
            println!(
                "{}",
                "Pages start as drafts; publish to show them on the site.".bright_black()
            );
        }
        PageAction::Publish { id, at } => {
            let page = pages
                .publish(id, at)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to publish page: {}", e))?;

            println!("{}", "✅ Page published".green().bold());
            if let Some(first) = page.first_published_at {
                println!("  First published: {}", first.to_rfc3339().cyan());
            }
        }
        PageAction::Unpublish { id } => {
            pages
                .unpublish(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to unpublish page: {}", e))?;

            println!("{}", "✅ Page is now a draft".green().bold());
        }
        PageAction::Delete { id, yes } => {
            delete_page(&state, id, yes).await?;
        }
    }

    Ok(())
}

/// Deletes a page after showing what goes with it.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn delete_page(state: &AppState, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete page".bright_blue().bold());
    println!();

    let page = state
        .page_service
        .get_page(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let below = state
        .page_service
        .list_pages()
        .await?
        .iter()
        .filter(|p| page.is_ancestor_of(p))
        .count();

    println!("  Page:  {}", page.title.cyan());
    println!("  Path:  {}", page.url_path.bright_white());
    println!("  Below: {}", below.to_string().yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this page and everything below it?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = state
        .page_service
        .delete_page(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete page: {}", e))?;

    println!(
        "{} {}",
        "✅ Pages removed:".green().bold(),
        removed.to_string().bright_white()
    );

    Ok(())
}

/// Prints the standard snippet registry.
fn list_snippet_kinds() {
    println!("{}", "🧩 Snippet kinds".bright_blue().bold());
    println!();

    for entry in SnippetRegistry::standard().entries() {
        println!(
            "  {:<24} {}",
            entry.path.cyan(),
            entry.verbose_name_plural.bright_white()
        );
    }
    println!();
}

/// Displays content counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let by_kind: Vec<(String, i64)> = sqlx::query_as(
        "SELECT kind, COUNT(*) FROM pages GROUP BY kind ORDER BY kind",
    )
    .fetch_all(pool)
    .await?;

    for (kind, count) in by_kind {
        println!(
            "  {:<18} {}",
            kind,
            count.to_string().bright_green().bold()
        );
    }

    let live: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE live AND first_published_at <= NOW()")
            .fetch_one(pool)
            .await?;
    let images: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images")
        .fetch_one(pool)
        .await?;

    println!();
    println!("  Live pages: {}", live.to_string().bright_green().bold());
    println!("  Images:     {}", images.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
