use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{Settings, load_config};
use database::{Database, check_connection, run_migrations};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug,sqlx=warn";

/// The main entry point for the School Reviews application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    let _guard = init_tracing();

    // Parse command-line arguments
    let cli = Cli::parse();
    let settings =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&settings).await,
        Commands::Migrate => {
            let db = Database::new(&settings.database);
            run_migrations(&db).await?;
            Ok(())
        }
        Commands::CheckDb => {
            let db = Database::new(&settings.database);
            check_connection(&db).await?;
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Submit and browse star-rated school reviews.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Run the web server (the default).
    Serve,
    /// Create or update the `reviews` table.
    Migrate,
    /// Verify that the database is reachable with the configured credentials.
    CheckDb,
}

/// Starts the web server after a connectivity check.
///
/// An unreachable database is logged but does not stop startup; every request
/// opens its own connection, so the server recovers once the database is back.
async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let db = Database::new(&settings.database);
    if check_connection(&db).await.is_err() {
        tracing::error!("Failed to connect to database.");
    }
    web_server::run_server(settings).await
}

fn init_tracing() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();
    guard
}
