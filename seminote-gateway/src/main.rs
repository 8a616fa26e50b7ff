//! seminote-gateway - API Gateway
//!
//! **Module Identity:**
//! - Name: seminote-gateway (API Gateway)
//! - Default port: 8080

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_gateway::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-gateway
#[derive(Parser, Debug)]
#[command(name = "seminote-gateway")]
#[command(about = "API gateway for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_GATEWAY_PORT and config.toml)
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
        "Starting Seminote API Gateway (seminote-gateway) v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("{}", seminote_common::platform::platform_info());

    seminote_common::serve::serve(build_router(), "seminote-gateway", port).await?;

    Ok(())
}
