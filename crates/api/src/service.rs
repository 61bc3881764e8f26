//! Service wiring: connect, migrate, serve

use anyhow::Result;
use auth::TokenService;
use db::Database;
use migration::{Migrator, MigratorTrait};
use registry::MenteeRegistry;
use std::net::SocketAddr;
use tracing::info;

use crate::{router, AppState};

/// Service configuration
pub struct ServiceConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
}

/// Connects to the store, applies migrations and runs the HTTP server
pub struct ServiceRunner {
    config: ServiceConfig,
    state: AppState,
}

impl ServiceRunner {
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        let db = Database::new(&config.database_url).await?;

        info!("Applying pending migrations");
        Migrator::up(db.connection(), None).await?;
        db.health_check().await?;

        let state = AppState {
            registry: MenteeRegistry::new(db.connection().clone()),
            tokens: TokenService::new(&config.jwt_secret),
        };

        Ok(Self { config, state })
    }

    /// Run the HTTP server until it fails or is shut down
    pub async fn run(self) -> Result<()> {
        let addr = self.config.listen_addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Starting Menteebook API on {}", addr);

        axum::serve(listener, router(self.state))
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        Ok(())
    }
}
