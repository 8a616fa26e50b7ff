//! seminote-payment - Payment Service
//!
//! **Module Identity:**
//! - Name: seminote-payment (Payment Service)
//! - Default port: 8086

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_payment::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-payment
#[derive(Parser, Debug)]
#[command(name = "seminote-payment")]
#[command(about = "Payment service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_PAYMENT_PORT and config.toml)
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
        "Starting Seminote Payment Service (seminote-payment) v{}",
        env!("CARGO_PKG_VERSION")
    );

    seminote_common::serve::serve(build_router(), "seminote-payment", port).await?;

    Ok(())
}
