//! seminote-notification - Notification Service
//!
//! **Module Identity:**
//! - Name: seminote-notification (Notification Service)
//! - Default port: 8085

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_notification::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-notification
#[derive(Parser, Debug)]
#[command(name = "seminote-notification")]
#[command(about = "Notification service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_NOTIFICATION_PORT and config.toml)
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
        "Starting Seminote Notification Service (seminote-notification) v{}",
        env!("CARGO_PKG_VERSION")
    );

    seminote_common::serve::serve(build_router(), "seminote-notification", port).await?;

    Ok(())
}
