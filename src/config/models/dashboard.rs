//! Top-level dashboard configuration

use serde::{Deserialize, Serialize};

use super::{PricingConfig, ServerConfig, ServicesConfig, SessionsConfig};

/// Complete dashboard configuration, the root of the YAML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Probed service endpoints
    #[serde(default)]
    pub services: ServicesConfig,
    /// Cost reporting settings
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Agent runtime CLI settings
    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl DashboardConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("server config error: {e}"))?;
        self.services
            .validate()
            .map_err(|e| format!("services config error: {e}"))?;
        self.pricing
            .validate()
            .map_err(|e| format!("pricing config error: {e}"))?;
        self.sessions
            .validate()
            .map_err(|e| format!("sessions config error: {e}"))?;
        Ok(())
    }
}
