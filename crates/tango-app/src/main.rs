use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tango_backend::HttpBackend;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod controller;
pub mod events;
pub mod render;
pub mod settings;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Terminal client for the word service: translate, keep a word list, review flashcards
#[derive(Debug, Parser)]
#[command(name = "tango", version)]
pub struct Cli {
    /// JSON config file; replaces the environment settings
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Base URL of the word service
    #[arg(long, env = "TANGO_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Screens go to stdout, logs to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal
        if !e.not_found() {
            eprintln!("Failed to read .env: {e}");
        }
    }

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = settings::resolve_config(&cli)?;
    tracing::info!("Using backend at {}", config.backend.url);

    let backend = Arc::new(HttpBackend::new(config.backend.clone())?);
    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config));

    let controller = AppController::new(state, backend, channel_capacity);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::warn!("task exited with error during shutdown: {e:#}");
        }
    }

    Ok(())
}
