//! contestd - contest game generator daemon
//!
//! Turns a free-text prompt, an optional brand URL and a color into a
//! ready-to-render prize wheel, scratch card or quiz configuration.

pub mod advisor;
pub mod api;
pub mod brand;
pub mod classify;
pub mod color;
pub mod config;
pub mod content;
pub mod game;
pub mod pipeline;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

pub use config::Config;
use pipeline::GameGenerator;

/// The contestd server instance
pub struct Server {
    config: Config,
    generator: Arc<GameGenerator>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Result<Self> {
        let generator = GameGenerator::from_config(&config)?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            generator: Arc::new(generator),
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Get the generator handle
    pub fn generator(&self) -> Arc<GameGenerator> {
        self.generator.clone()
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(self.generator.clone())
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("contestd listening on {}", local_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("contestd shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
