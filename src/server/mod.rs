// Summary service HTTP server
//
// Stateless: every request is rendered from its own body, nothing is shared
// between requests.

mod handlers;

pub use handlers::{
    create_router, handle_generate, health_check, service_info, HealthResponse, ServiceInfo,
};

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::constants::MAX_BODY_BYTES;
use crate::config::ServerConfig;

pub struct BrandServer {
    config: ServerConfig,
}

impl BrandServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Router with CORS, tracing and the body limit applied
    pub fn app() -> Router {
        create_router()
            .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP server and run until the process exits
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.config.bind_address))?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        tracing::info!("Sparkup summary service listening on http://{}", addr);

        axum::serve(listener, Self::app())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
