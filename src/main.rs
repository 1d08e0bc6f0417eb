//! activity-insights CLI
//!
//! Commands:
//! - serve: HTTP API for per-day activity summaries
//! - normalize: repair blank or placeholder titles and process names
//! - categorize: assign a category to every activity
//! - diagnose: report blank values per column, as text or JSON

use activity_insights::api::{router, AppState};
use activity_insights::categorizer::{categorize_store, Categorizer};
use activity_insights::config::{Config, Overrides, ServerConfig};
use activity_insights::diagnostics::diagnose_store;
use activity_insights::error::{AppError, AppResult};
use activity_insights::init_database;
use activity_insights::normalizer::normalize_store;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "activity-insights")]
#[command(version)]
#[command(about = "Clean, categorize and summarize a desktop activity log", long_about = None)]
struct Cli {
    /// SQLite database file [env: ACTIVITY_INSIGHTS_DB]
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// JSON category rule file [env: ACTIVITY_INSIGHTS_RULES]
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the activity summary API
    Serve {
        /// Bind address [env: ACTIVITY_INSIGHTS_HOST] [default: 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// Port [env: ACTIVITY_INSIGHTS_PORT] [default: 8000]
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Repair blank or placeholder window titles and process names
    Normalize,

    /// Assign a category to every activity
    Categorize,

    /// Report blank values per column
    Diagnose {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::resolve(Overrides {
        db_path: cli.db,
        rules_path: cli.rules,
    })?;

    match cli.command {
        Commands::Serve { host, port } => {
            let server = ServerConfig::resolve(host, port)?;
            let db = init_database(&config.db_path)?;
            serve(&server, AppState::new(db))
        }
        Commands::Normalize => {
            let db = init_database(&config.db_path)?;
            normalize_store(db.connection())?;
            Ok(())
        }
        Commands::Categorize => {
            let db = init_database(&config.db_path)?;
            let categorizer = Categorizer::load(config.rules_path.as_deref())?;
            categorize_store(db.connection(), &categorizer)?;
            Ok(())
        }
        Commands::Diagnose { json } => {
            let db = init_database(&config.db_path)?;
            let report = diagnose_store(db.connection())?;
            if json {
                print_report(&report.to_json()?);
            } else {
                print_report(&report);
            }
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout, reason = "the report is the command's output")]
fn print_report(report: &impl std::fmt::Display) {
    print!("{report}");
}

fn serve(config: &ServerConfig, state: AppState) -> AppResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let address = config.bind_address();
        let listener = tokio::net::TcpListener::bind(&address).await?;
        log::info!("Listening on http://{address}");

        axum::serve(listener, router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log::info!("Server stopped");
        Ok::<_, AppError>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
