//! src/app.rs
//!
//! Defines the main `App` struct, which owns the configuration and manages
//! the lifecycle of the store and the API server.

use crate::{api::ApiServer, config::Config, error::Result, store::Store};
use tokio_util::sync::CancellationToken;

pub struct App {
    config: Config,
    shutdown_token: CancellationToken,
}

impl App {
    /// Creates a new `App` from the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            shutdown_token: CancellationToken::new(),
        })
    }

    /// A handle that stops the app when cancelled, as Ctrl+C does.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Opens the store, serves the API until shutdown, then returns.
    pub async fn run(self) -> Result<()> {
        let store = Store::open(&self.config).await?;

        tracing::info!(
            bind_addr = %self.config.bind_addr,
            testing_routes = self.config.testing_routes,
            "🚀 Starting bloglist..."
        );

        // --- Wait for Shutdown Signal ---
        let shutdown_token = self.shutdown_token.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                        return;
                    }
                    tracing::info!("Ctrl+C received. Initiating graceful shutdown...");
                    shutdown_token.cancel();
                }
                _ = shutdown_token.cancelled() => {}
            }
        });

        let api_server = ApiServer::new(self.config.bind_addr, store, self.config.testing_routes);
        let result = api_server.run(self.shutdown_token.clone()).await;
        // Stops the signal listener if the server exited on its own.
        self.shutdown_token.cancel();

        match &result {
            Ok(()) => tracing::info!("👋 bloglist has shut down gracefully."),
            Err(e) => tracing::error!(error = %e, "API server failed"),
        }
        result
    }
}
