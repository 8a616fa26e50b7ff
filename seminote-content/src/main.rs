//! seminote-content - Content Service
//!
//! **Module Identity:**
//! - Name: seminote-content (Content Service)
//! - Default port: 8082

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_content::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-content
#[derive(Parser, Debug)]
#[command(name = "seminote-content")]
#[command(about = "Content service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_CONTENT_PORT and config.toml)
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
        "Starting Seminote Content Service (seminote-content) v{}",
        env!("CARGO_PKG_VERSION")
    );

    seminote_common::serve::serve(build_router(), "seminote-content", port).await?;

    Ok(())
}
