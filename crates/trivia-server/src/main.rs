//! trivia server binary.
//!
//! Reads `trivia.toml` (or the path given with `--config`), layers `TRIVIA_*`
//! environment variables on top, and serves the fact list API over HTTP from
//! an in-process store.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use tokio::{net::TcpListener, sync::Notify};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trivia_server::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Trivia fact list server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, env = "TRIVIA_CONFIG", default_value = "trivia.toml")]
  config: PathBuf,

  /// Emit logs as newline-delimited JSON on stderr.
  #[arg(long)]
  json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.json_logs);

  let config = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let app = trivia_server::app(&config);
  let address = config.server_address.clone();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!(transport = "http", %address, prefix = %config.route_prefix, "listening");

  serve(listener, app, config.graceful_shutdown()).await?;

  tracing::info!("terminated");
  Ok(())
}

fn init_tracing(json: bool) {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  if json {
    tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .init();
  } else {
    tracing_subscriber::fmt().with_env_filter(filter).init();
  }
}

/// Serve until a shutdown signal, then give open connections `grace` to finish.
async fn serve(listener: TcpListener, app: Router, grace: Duration) -> anyhow::Result<()> {
  let draining = Arc::new(Notify::new());

  let signal = {
    let draining = Arc::clone(&draining);
    async move {
      shutdown_signal().await;
      tracing::info!(?grace, "terminating");
      draining.notify_one();
    }
  };
  let server = async move { axum::serve(listener, app).with_graceful_shutdown(signal).await };

  tokio::select! {
    result = server => result.context("server error"),
    () = async {
      draining.notified().await;
      tokio::time::sleep(grace).await;
    } => {
      tracing::warn!("graceful shutdown timed out, dropping open connections");
      Ok(())
    }
  }
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(err) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %err, "unable to install ctrl+c handler");
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(err) => {
        tracing::error!(error = %err, "unable to install sigterm handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
}
