//! seminote-progress - Progress Service
//!
//! **Module Identity:**
//! - Name: seminote-progress (Progress Service)
//! - Default port: 8083

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_progress::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-progress
#[derive(Parser, Debug)]
#[command(name = "seminote-progress")]
#[command(about = "Progress service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_PROGRESS_PORT and config.toml)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let port = resolve_port(args.port, SERVICE_NAME, DEFAULT_PORT);

    info!(
        "Starting Seminote Progress Service (seminote-progress) v{}",
        env!("CARGO_PKG_VERSION")
    );

    seminote_common::serve::serve(build_router(), "seminote-progress", port).await?;

    Ok(())
}
