//! seminote-analytics - Analytics Service
//!
//! **Module Identity:**
//! - Name: seminote-analytics (Analytics Service)
//! - Default port: 8084

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_analytics::{build_router, DEFAULT_PORT, SERVICE_NAME};
use seminote_common::config::resolve_port;

/// Command-line arguments for seminote-analytics
#[derive(Parser, Debug)]
#[command(name = "seminote-analytics")]
#[command(about = "Analytics service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_ANALYTICS_PORT and config.toml)
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
        "Starting Seminote Analytics Service (seminote-analytics) v{}",
        env!("CARGO_PKG_VERSION")
    );

    seminote_common::serve::serve(build_router(), "seminote-analytics", port).await?;

    Ok(())
}
