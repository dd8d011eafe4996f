//! Versioned static-resource server.
//!
//! Serves web assets and i18n bundles under version-scoped URL prefixes,
//! either from a single optimized `dist/public` build output (production) or
//! from each source `public` folder without caching (development).

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resource_server::config::load_config;
use resource_server::HttpServer;

#[derive(Parser)]
#[command(name = "resource-server")]
#[command(about = "Versioned static-resource server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "resource-server.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resource_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing::info!(
        version = %config.version,
        optimize = config.resources.optimize,
        asset_dirs = config.asset_dirs.len(),
        bundles = config.bundles.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(&config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
