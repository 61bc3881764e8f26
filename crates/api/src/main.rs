//! Standalone Menteebook API server binary

use anyhow::Result;
use api::{ServiceConfig, ServiceRunner};
use clap::Parser;
use db::mask_url;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[clap(name = "menteebook")]
#[clap(about = "Menteebook - mentor/mentee tracking API server")]
struct Args {
    /// Database connection URL (can also be set via MENTEEBOOK_DATABASE_URL)
    #[clap(long, env = "MENTEEBOOK_DATABASE_URL")]
    database_url: String,

    /// Secret for signing bearer tokens
    #[clap(long, env = "MENTEEBOOK_JWT_SECRET")]
    jwt_secret: String,

    /// Listen address for the HTTP server
    #[clap(long, default_value = "0.0.0.0:5000", env = "MENTEEBOOK_LISTEN_ADDR")]
    listen_addr: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[clap(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Menteebook API server");
    tracing::info!("Database URL: {}", mask_url(&args.database_url));
    tracing::info!("Listen address: {}", args.listen_addr);

    let config = ServiceConfig {
        database_url: args.database_url,
        jwt_secret: args.jwt_secret,
        listen_addr: args.listen_addr,
    };

    let service = ServiceRunner::new(config).await?;

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        tracing::info!("Received shutdown signal");
    };

    tokio::select! {
        result = service.run() => {
            if let Err(e) = result {
                tracing::error!("Service error: {}", e);
                std::process::exit(1);
            }
        }
        _ = shutdown => {
            tracing::info!("Shutting down gracefully");
        }
    }

    tracing::info!("Menteebook API server stopped");
    Ok(())
}
