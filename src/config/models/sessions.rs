//! Session source configuration

use serde::{Deserialize, Serialize};

/// Agent runtime CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// Program that prints the session listing
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments passed to the program
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Timeout for one CLI invocation in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SessionsConfig {
    /// Validate session source configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("sessions program cannot be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("sessions timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_program() -> String {
    "clawdbot".to_string()
}

fn default_args() -> Vec<String> {
    vec!["sessions".to_string(), "list".to_string(), "--json".to_string()]
}

fn default_timeout_ms() -> u64 {
    5_000
}
