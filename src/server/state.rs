//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::health::HealthProber;
use crate::core::sessions::SessionSource;
use crate::settings::SettingsStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// This struct contains shared resources that need to be accessed across
/// multiple request handlers. All fields are wrapped in Arc for efficient
/// sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard configuration (shared read-only)
    pub config: Arc<Config>,
    /// Endpoint prober shared by the status route and dashboard snapshots
    pub prober: Arc<HealthProber>,
    /// Agent session source
    pub sessions: Arc<dyn SessionSource>,
    /// Mutable dashboard settings
    pub settings: Arc<SettingsStore>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        prober: HealthProber,
        sessions: Arc<dyn SessionSource>,
        settings: SettingsStore,
    ) -> Self {
        Self {
            config: Arc::new(config),
            prober: Arc::new(prober),
            sessions,
            settings: Arc::new(settings),
        }
    }

    /// Get dashboard configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
