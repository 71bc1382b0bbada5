//! vector-service
//!
//! HTTP API for 2-D vector arithmetic plus its static front-end.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ cors ─▶ timeout ─▶ body limit ─▶ metrics
//!                                                                              │
//!                        ┌──────────────────────┬──────────────────┬───────────┘
//!                        ▼                      ▼                  ▼
//!                  /api/* handlers          /health         / and /static/*
//!                  VectorJson extract       {"status":"ok"}  ServeFile/ServeDir
//!                        │
//!                        ▼
//!                  vector::ops (pure)
//!                        │
//!                        ▼
//!     ◀────────────  {success, result, detail}
//! ```

use clap::Parser;
use std::path::PathBuf;

use vector_service::config::{load_config, validate_config, ConfigError, ServiceConfig};
use vector_service::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "vector-service")]
#[command(about = "HTTP API for 2-D vector arithmetic", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `static_files.dir`.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(dir) = args.static_dir {
        config.static_files.dir = dir;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);
    tracing::info!("vector-service v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        config_file = ?args.config,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    vector_service::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
