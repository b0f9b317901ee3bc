//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod stats;
pub mod token;
pub mod watch;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use amoria_core::AppError;
use amoria_core::config::AppConfig;

/// Amoria — notification and activity backend
#[derive(Debug, Parser)]
#[command(name = "amoria", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Amoria server
    Serve(serve::ServeArgs),
    /// Run pending database migrations
    Migrate(migrate::MigrateArgs),
    /// Print platform statistics
    Stats(stats::StatsArgs),
    /// Mint an access token for a member
    Token(token::TokenArgs),
    /// Stream the live notification feed for a member
    Watch(watch::WatchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Stats(args) => stats::execute(args, &self.env, self.format).await,
            Commands::Token(args) => token::execute(args, &self.env).await,
            Commands::Watch(args) => watch::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create a database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = amoria_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
