//! Probed service configuration
//!
//! The default endpoint table mirrors the conventional local AI stack.
//! Each service's base URL can be overridden with an environment variable
//! before falling back to its conventional localhost port; the health path
//! is appended to whichever base wins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::health::EndpointSpec;

/// Default per-probe timeout in milliseconds
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

/// The stack services probed out of the box: name, env override,
/// conventional base URL, and health path.
const DEFAULT_SERVICES: &[(&str, &str, &str, &str)] = &[
    ("langfuse", "LANGFUSE_URL", "http://localhost:3000", "/api/public/health"),
    ("anythingllm", "ANYTHINGLLM_URL", "http://localhost:3001", "/api/ping"),
    ("ollama", "OLLAMA_URL", "http://localhost:11434", "/api/tags"),
    ("qdrant", "QDRANT_URL", "http://localhost:6333", "/healthz"),
    ("chroma", "CHROMA_URL", "http://localhost:8000", "/api/v2/heartbeat"),
    ("searxng", "SEARXNG_URL", "http://localhost:8080", ""),
];

/// Probed services configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Endpoints probed by the status routes
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<EndpointSpec>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
        }
    }
}

impl ServicesConfig {
    /// Validate the endpoint table
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            endpoint.validate()?;
            if !seen.insert(endpoint.name.as_str()) {
                return Err(format!("duplicate endpoint name: {}", endpoint.name));
            }
        }
        Ok(())
    }
}

/// Build the default endpoint table, honoring env overrides
pub fn default_endpoints() -> Vec<EndpointSpec> {
    DEFAULT_SERVICES
        .iter()
        .map(|(name, env_var, default_base, health_path)| {
            let base = std::env::var(env_var).unwrap_or_else(|_| (*default_base).to_string());
            let url = format!("{}{}", base.trim_end_matches('/'), health_path);
            EndpointSpec::new(*name, url, DEFAULT_PROBE_TIMEOUT_MS)
        })
        .collect()
}
