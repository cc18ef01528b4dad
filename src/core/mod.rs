//! Core functionality for the dashboard service
//!
//! This module contains the domain logic the HTTP layer serves: endpoint
//! health probing, agent session ingestion, and token cost estimation.

pub mod costs;
pub mod health;
pub mod sessions;

// Re-export commonly used types
pub use costs::CostReport;
pub use health::{AggregateHealth, EndpointSpec, HealthProber, ProbeOutcome, ProbeStatus};
pub use sessions::{ActivityReport, Session, SessionSource};
