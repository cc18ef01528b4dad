//! # Stackboard
//!
//! Backend for a self-hosted AI stack dashboard. It polls the health
//! endpoints of the local services, reads agent session listings from
//! the stack CLI, and reshapes both into the summaries the dashboard
//! UI renders.
//!
//! ## Features
//!
//! - **Service Health**: Concurrent probing of local HTTP endpoints with per-endpoint timeouts
//! - **Agent Activity**: CLI session listings reshaped into per-agent activity summaries
//! - **Cost Metrics**: Token spend derived from session usage with configurable model rates
//! - **Live Stream**: Server-sent events pushing full dashboard snapshots on an interval
//! - **Runtime Settings**: In-memory settings store updatable over the API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stackboard::{Config, Dashboard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     let dashboard = Dashboard::new(config)?;
//!     dashboard.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod settings;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{DashboardError, Result};

// Export dashboard report types
pub use core::costs::{BudgetStatus, CostReport};
pub use core::health::{AggregateHealth, EndpointSpec, HealthProber, ProbeOutcome, ProbeStatus};
pub use core::sessions::{ActivityReport, CliSessionSource, Session, SessionSource};
pub use settings::{DashboardSettings, SettingsPatch, SettingsStore};

use tracing::info;

/// The dashboard backend wired together from its configuration
pub struct Dashboard {
    config: Config,
    server: server::HttpServer,
}

impl Dashboard {
    /// Create a new dashboard instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new dashboard instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the dashboard server
    pub async fn run(self) -> Result<()> {
        info!("Starting Stackboard Dashboard");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
