//! TechFix booking page server
//!
//! ## Usage
//!
//! ```bash
//! techfix                          # Start on 127.0.0.1:3000
//! techfix --bind 0.0.0.0:8080      # Custom address
//! techfix --config ./techfix.yaml  # Explicit config file
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use techfix_config::TechfixConfig;
use techfix_web::{routes, serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "techfix")]
#[command(about = "TechFix - Electronics Repair Shop booking page")]
#[command(version)]
struct Cli {
    /// Config file (YAML). Defaults to $CONFIG_DIR/techfix/config.yaml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(short, long)]
    bind: Option<String>,

    /// How long the success banner stays visible, in milliseconds
    #[arg(long)]
    banner_ms: Option<u64>,

    /// Do not print the route table at startup
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techfix_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config =
        TechfixConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(ms) = cli.banner_ms {
        config.booking.banner_ms = ms;
    }
    let addr = config.bind_addr()?;

    tracing::info!(
        banner_ms = config.booking.banner_ms,
        view_ttl_secs = config.booking.view_ttl_secs,
        "configuration loaded"
    );

    if !cli.quiet {
        routes::print_routes();
    }

    let state = Arc::new(AppState::new(config.booking));
    serve(state, addr)
        .await
        .with_context(|| format!("Server on {} stopped", addr))?;

    Ok(())
}
