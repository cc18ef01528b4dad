//! Configuration management for the dashboard service
//!
//! This module handles loading and validation of all dashboard configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the dashboard service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {e}")))?;

        let dashboard: DashboardConfig = serde_yaml::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {e}")))?;

        let config = Self { dashboard };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.dashboard.server
    }

    /// Get probed services configuration
    pub fn services(&self) -> &ServicesConfig {
        &self.dashboard.services
    }

    /// Get pricing configuration
    pub fn pricing(&self) -> &PricingConfig {
        &self.dashboard.pricing
    }

    /// Get session source configuration
    pub fn sessions(&self) -> &SessionsConfig {
        &self.dashboard.sessions
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.dashboard.validate().map_err(DashboardError::Config)?;
        debug!("Configuration validation completed");
        Ok(())
    }
}
