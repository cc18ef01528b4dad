//! Session listing sources
//!
//! The dashboard learns about agent sessions from a collaborator behind the
//! [`SessionSource`] trait. Production uses [`CliSessionSource`], which runs
//! the agent runtime's CLI directly (no shell) and parses its JSON output;
//! tests substitute in-memory sources.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::core::sessions::types::{Session, SessionListing};
use crate::utils::error::{DashboardError, Result};

/// Provider of the current session listing
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// List all sessions known to the agent runtime
    async fn sessions(&self) -> Result<Vec<Session>>;
}

/// Session source backed by the agent runtime's CLI
pub struct CliSessionSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CliSessionSource {
    /// Create a source that runs `program` with `args`, bounded by `timeout_ms`
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout_ms: u64) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

#[async_trait]
impl SessionSource for CliSessionSource {
    async fn sessions(&self) -> Result<Vec<Session>> {
        debug!(program = %self.program, "listing agent sessions");

        let mut command = Command::new(&self.program);
        command.args(&self.args).kill_on_drop(true);

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                DashboardError::sessions(format!(
                    "'{}' did not finish within {}ms",
                    self.program,
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| {
                DashboardError::sessions(format!("failed to run '{}': {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(DashboardError::sessions(if detail.is_empty() {
                format!("'{}' exited with {}", self.program, output.status)
            } else {
                format!("'{}' failed: {detail}", self.program)
            }));
        }

        let listing: SessionListing = serde_json::from_slice(&output.stdout)
            .map_err(|e| DashboardError::sessions(format!("unparseable session listing: {e}")))?;
        Ok(listing.sessions)
    }
}
