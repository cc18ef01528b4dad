//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{DashboardError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| DashboardError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting Stackboard Dashboard");

    // Auto-load configuration file
    let config_path = "config/dashboard.yaml";
    info!("📄 Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("✅ Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "⚠️  Configuration file loading failed, using default config: {}",
                e
            );
            info!("💡 Copy config/dashboard.yaml.example to customize endpoints and pricing");
            Config::default()
        }
    };

    // Create and start server
    let server = HttpServer::new(&config)?;
    info!(
        "🌐 Dashboard starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/services/status - Probe monitored services");
    info!("   GET  /api/agents/activity - Agent session activity");
    info!("   GET  /api/costs - Token cost metrics");
    info!("   GET  /api/dashboard - Combined dashboard snapshot");
    info!("   GET  /api/dashboard/stream - Live snapshot stream (SSE)");
    info!("   GET  /api/settings - Dashboard settings");
    info!("   POST /api/settings - Update dashboard settings");

    server.start().await
}
