//! CLI administration tool for weather-aggregator.
//!
//! Provides commands for loading and inspecting the gazetteer and for
//! database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Load a worldcities-style CSV into the gazetteer
//! cargo run --bin admin -- cities import data/worldcities.csv
//!
//! # Count gazetteer records
//! cargo run --bin admin -- cities count
//!
//! # Remove every gazetteer record
//! cargo run --bin admin -- cities clear --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`): PostgreSQL connection

use weather_aggregator::config::Config;
use weather_aggregator::domain::repositories::CityRepository;
use weather_aggregator::infrastructure::persistence::PgCityRepository;
use weather_aggregator::utils::gazetteer_csv::read_gazetteer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing weather-aggregator.
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
    /// Manage the city gazetteer
    Cities {
        #[command(subcommand)]
        action: CitiesAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Gazetteer subcommands.
#[derive(Subcommand)]
enum CitiesAction {
    /// Import cities from a CSV file
    Import {
        /// Path to a CSV with city, city_ascii, lat, lng, country, admin_name columns
        path: PathBuf,

        /// Run migrations before importing
        #[arg(long)]
        migrate: bool,
    },

    /// Show the number of gazetteer records
    Count,

    /// Delete every gazetteer record
    Clear {
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

    /// Run pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Cities { action } => handle_cities_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches gazetteer commands.
async fn handle_cities_action(action: CitiesAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCityRepository::new(Arc::new(pool.clone())));

    match action {
        CitiesAction::Import { path, migrate } => {
            if migrate {
                run_migrations(pool).await?;
            }
            import_cities(repo, path).await?;
        }
        CitiesAction::Count => {
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count cities: {}", e))?;
            println!(
                "  Cities: {}",
                count.to_string().bright_green().bold()
            );
        }
        CitiesAction::Clear { yes } => {
            clear_cities(repo, yes).await?;
        }
    }

    Ok(())
}

/// Imports a gazetteer CSV in one transaction.
///
/// Each city is assigned the first continent whose country list contains
/// its country; cities from unlisted countries get no region. Rows that
/// cannot be parsed are reported and skipped.
async fn import_cities(repo: Arc<PgCityRepository>, path: PathBuf) -> Result<()> {
    println!("{}", "🌍 Import Gazetteer".bright_blue().bold());
    println!();

    let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    let import = read_gazetteer(file)
        .with_context(|| format!("Failed to read CSV header of {}", path.display()))?;

    for (line, reason) in &import.skipped {
        println!(
            "  {} row {}: {}",
            "⚠️  Skipped".yellow(),
            line,
            reason.bright_black()
        );
    }

    let without_region = import.cities.iter().filter(|c| c.region.is_none()).count();
    let total = import.cities.len();

    let inserted = repo
        .insert_many(import.cities)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to insert cities: {}", e))?;

    println!();
    println!(
        "{} {} cities imported ({} without region, {} rows skipped)",
        "✅".green(),
        inserted.to_string().bright_white().bold(),
        without_region,
        import.skipped.len()
    );
    if inserted as usize != total {
        println!(
            "{}",
            format!("⚠️  {} of {} parsed rows were not stored", total - inserted as usize, total)
                .yellow()
        );
    }
    println!();

    Ok(())
}

/// Deletes the whole gazetteer after confirmation.
async fn clear_cities(repo: Arc<PgCityRepository>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Clear Gazetteer".bright_blue().bold());
    println!();

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if count == 0 {
        println!("{}", "  Gazetteer is already empty".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {} cities?", count))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear cities: {}", e))?;

    println!();
    println!(
        "{} {} cities deleted",
        "✅".green(),
        deleted.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => run_migrations(pool).await?,
    }

    Ok(())
}

async fn run_migrations(pool: &PgPool) -> Result<()> {
    println!("{}", "📦 Running migrations...".bright_blue());
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    println!("{}", "✅ Migrations applied".green().bold());
    Ok(())
}
