//! Sweep CLI
//!
//! Command-line job board for the Sweep job store: search, filter and view
//! scheduled cleaning jobs, and apply status changes.

mod commands;
mod config;
mod file_source;
mod id_resolver;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use sweep_core::role::Role;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Sweep job board CLI", long_about = None)]
struct Cli {
    /// Job store URL
    #[arg(long, env = "SWEEP_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Read jobs from a JSON file instead of the job store
    #[arg(long, env = "SWEEP_JOBS_FILE")]
    file: Option<std::path::PathBuf>,

    /// Role deciding which job actions are allowed
    #[arg(long, env = "SWEEP_ROLE", default_value_t = Role::Manager)]
    role: Role,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweep_cli=info,sweep_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        jobs_file: cli.file,
        role: cli.role,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
