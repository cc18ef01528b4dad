//! Service health probing
//!
//! This module turns a list of endpoint specs into a merged health summary.
//! A probe is one bounded-time GET against one endpoint; a probe round runs
//! every probe concurrently and reports exactly one outcome per spec, in
//! input order, regardless of how many endpoints fail.
//!
//! # Module Structure
//!
//! - `types` - Endpoint specs, probe outcomes, and the aggregate summary
//! - `prober` - The concurrent prober itself
//! - `tests` - Test suite for probing and aggregation

pub mod prober;
pub mod types;

pub use prober::HealthProber;
pub use types::{AggregateHealth, EndpointSpec, OverallStatus, ProbeOutcome, ProbeStatus};
