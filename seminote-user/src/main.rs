//! seminote-user - User Service
//!
//! **Module Identity:**
//! - Name: seminote-user (User Service)
//! - Default port: 8081

use anyhow::Result;
use clap::Parser;
use tracing::info;

use seminote_common::config::resolve_port;
use seminote_user::{build_router, DEFAULT_PORT, SERVICE_NAME};

/// Command-line arguments for seminote-user
#[derive(Parser, Debug)]
#[command(name = "seminote-user")]
#[command(about = "User service for the Seminote piano learning platform")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SEMINOTE_USER_PORT and config.toml)
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
        "Starting Seminote User Service (seminote-user) v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("{}", seminote_common::platform::platform_info());

    seminote_common::serve::serve(build_router(), "seminote-user", port).await?;

    Ok(())
}
