//! Concurrent endpoint probing
//!
//! One probe round fans out over every configured endpoint at once. Each
//! probe runs under its own timeout budget, so the wall time of a round
//! tracks the slowest single endpoint rather than the sum of all of them.
//! Probe failures are data, not errors: an unreachable endpoint produces
//! an offline outcome and never aborts the round.

use futures::future;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, warn};

use crate::core::health::types::{AggregateHealth, EndpointSpec, ProbeOutcome};
use crate::utils::error::{DashboardError, Result};

/// Probes HTTP endpoints and merges the outcomes into aggregates
#[derive(Debug, Clone)]
pub struct HealthProber {
    client: reqwest::Client,
}

impl HealthProber {
    /// Create a prober with a fresh HTTP client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a prober around an existing HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Probe every endpoint concurrently and merge the outcomes.
    ///
    /// Fails fast with a configuration error when any spec is malformed or
    /// two specs share a name; otherwise each endpoint independently times
    /// out or fails without affecting the others. The returned aggregate
    /// holds exactly one outcome per spec, in input order.
    pub async fn probe_all(&self, specs: &[EndpointSpec]) -> Result<AggregateHealth> {
        validate_specs(specs)?;

        let outcomes = future::join_all(specs.iter().map(|spec| self.probe_one(spec))).await;
        let aggregate = AggregateHealth::from_outcomes(outcomes);

        debug!(
            online = aggregate.online_count,
            total = aggregate.total_count,
            "probe round complete"
        );
        Ok(aggregate)
    }

    /// Probe a single endpoint under its own timeout budget
    async fn probe_one(&self, spec: &EndpointSpec) -> ProbeOutcome {
        let start = Instant::now();
        let response = self
            .client
            .get(&spec.url)
            .timeout(spec.timeout())
            .send()
            .await;

        match response {
            Ok(response) => {
                let latency_ms = start.elapsed().as_millis() as u64;
                let status = response.status();
                // Auth walls and 4xx still prove the service is up and answering.
                if status.as_u16() < 500 {
                    ProbeOutcome::online(spec, latency_ms)
                } else {
                    warn!(endpoint = %spec.name, %status, "endpoint answered with a server error");
                    ProbeOutcome::offline(spec, Some(latency_ms), format!("HTTP {status}"))
                }
            }
            Err(err) if err.is_builder() => {
                warn!(endpoint = %spec.name, error = %err, "probe request could not be built");
                ProbeOutcome::error(spec, err.to_string())
            }
            Err(err) => {
                debug!(endpoint = %spec.name, error = %err, "probe failed");
                ProbeOutcome::offline(spec, None, describe_failure(&err, spec))
            }
        }
    }
}

impl Default for HealthProber {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject malformed specs before any request is issued
fn validate_specs(specs: &[EndpointSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in specs {
        spec.validate().map_err(DashboardError::Config)?;
        if !seen.insert(spec.name.as_str()) {
            return Err(DashboardError::config(format!(
                "duplicate endpoint name: {}",
                spec.name
            )));
        }
    }
    Ok(())
}

/// Human-readable description of a transport failure
fn describe_failure(err: &reqwest::Error, spec: &EndpointSpec) -> String {
    if err.is_timeout() {
        format!("timed out after {}ms", spec.timeout_ms)
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
