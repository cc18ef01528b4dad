//! Probe types and aggregate health summaries
//!
//! This module defines the shapes exchanged with the dashboard UI: the
//! per-endpoint probe description, the per-endpoint probe outcome, and the
//! merged aggregate for one probe round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-endpoint timeout when a spec omits one
pub fn default_probe_timeout_ms() -> u64 {
    5_000
}

/// A single HTTP endpoint to probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Display name, unique within one probe round
    pub name: String,
    /// Absolute URL of the health endpoint
    pub url: String,
    /// Per-endpoint timeout budget in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
}

impl EndpointSpec {
    /// Create a spec with an explicit timeout
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout_ms,
        }
    }

    /// Timeout budget as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate the spec fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("endpoint name cannot be empty".to_string());
        }
        if self.url.trim().is_empty() {
            return Err(format!("endpoint '{}' has an empty URL", self.name));
        }
        if let Err(e) = url::Url::parse(&self.url) {
            return Err(format!("endpoint '{}' has an invalid URL: {}", self.name, e));
        }
        if self.timeout_ms == 0 {
            return Err(format!(
                "endpoint '{}' has a non-positive timeout",
                self.name
            ));
        }
        Ok(())
    }
}

/// Outcome classification for one probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// Endpoint answered with a non-5xx HTTP status
    Online,
    /// Endpoint was unreachable, timed out, or answered 5xx
    Offline,
    /// The request could not be constructed at all
    Error,
}

impl ProbeStatus {
    /// Whether this outcome counts toward the online tally
    pub fn is_online(&self) -> bool {
        matches!(self, ProbeStatus::Online)
    }
}

/// Result of probing one endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Name copied from the probed spec
    pub name: String,
    /// URL copied from the probed spec
    pub url: String,
    /// Outcome classification
    pub status: ProbeStatus,
    /// Round-trip time in milliseconds, absent when no response arrived
    #[serde(rename = "latency", default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Failure description, absent for online outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the probe completed
    pub timestamp: DateTime<Utc>,
}

impl ProbeOutcome {
    /// Create an online outcome
    pub fn online(spec: &EndpointSpec, latency_ms: u64) -> Self {
        Self {
            name: spec.name.clone(),
            url: spec.url.clone(),
            status: ProbeStatus::Online,
            latency_ms: Some(latency_ms),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an offline outcome
    pub fn offline(spec: &EndpointSpec, latency_ms: Option<u64>, error: String) -> Self {
        Self {
            name: spec.name.clone(),
            url: spec.url.clone(),
            status: ProbeStatus::Offline,
            latency_ms,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Create an error outcome for a request that never reached the wire
    pub fn error(spec: &EndpointSpec, error: String) -> Self {
        Self {
            name: spec.name.clone(),
            url: spec.url.clone(),
            status: ProbeStatus::Error,
            latency_ms: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }
}

/// Overall verdict for one probe round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverallStatus {
    /// Every probed endpoint is online
    AllHealthy,
    /// At least one endpoint is offline or errored
    Degraded,
}

/// Merged result of one probe round
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateHealth {
    /// Overall verdict across all outcomes
    pub status: OverallStatus,
    /// Number of online outcomes
    pub online_count: usize,
    /// Number of probed endpoints
    pub total_count: usize,
    /// Per-endpoint outcomes, in the order the specs were given
    pub services: Vec<ProbeOutcome>,
    /// When the round was merged
    pub timestamp: DateTime<Utc>,
}

impl AggregateHealth {
    /// Merge per-endpoint outcomes into an aggregate
    pub fn from_outcomes(services: Vec<ProbeOutcome>) -> Self {
        let total_count = services.len();
        let online_count = services.iter().filter(|o| o.status.is_online()).count();
        let status = if online_count == total_count {
            OverallStatus::AllHealthy
        } else {
            OverallStatus::Degraded
        };

        Self {
            status,
            online_count,
            total_count,
            services,
            timestamp: Utc::now(),
        }
    }

    /// Whether any endpoint failed this round
    pub fn is_degraded(&self) -> bool {
        self.status == OverallStatus::Degraded
    }
}
