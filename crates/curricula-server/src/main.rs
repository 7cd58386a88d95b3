//! curricula server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds an
//! in-memory registry, and serves the JSON API over HTTP. The registry keeps
//! no state on disk; restarting the process starts from an empty catalog.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::http::HeaderName;
use clap::Parser;
use curricula_api::ApiState;
use curricula_store_memory::MemoryRegistry;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Curricula subject catalog and enrollment registry")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let caller_header = HeaderName::try_from(server_cfg.caller_header.as_str())
    .with_context(|| format!("invalid caller_header {:?}", server_cfg.caller_header))?;

  let registry = MemoryRegistry::with_config(
    server_cfg.policy.clone(),
    server_cfg.validation.clone(),
  );
  tracing::info!(policy = ?registry.policy(), "registry initialised");

  let state = ApiState::new(Arc::new(registry)).with_caller_header(caller_header);
  let app = curricula_api::api_router(state).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
