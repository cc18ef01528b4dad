//! Session records as reported by the agent runtime CLI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::from_epoch_millis;

/// One agent session from the runtime's session listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Stable session identifier
    pub session_id: String,
    /// Colon-separated session key, e.g. `agent:market-research:discord`
    pub key: String,
    /// Session kind as reported by the runtime
    #[serde(default)]
    pub kind: Option<String>,
    /// Channel the session is attached to
    #[serde(default)]
    pub channel: Option<String>,
    /// Fully qualified model id, e.g. `anthropic/claude-3-5-sonnet-20241022`
    #[serde(default)]
    pub model: Option<String>,
    /// Lifetime token count for the session
    #[serde(default)]
    pub total_tokens: u64,
    /// Last activity as epoch milliseconds
    pub updated_at: i64,
}

impl Session {
    /// Last activity as a UTC timestamp
    pub fn updated_at_utc(&self) -> DateTime<Utc> {
        from_epoch_millis(self.updated_at)
    }

    /// Whether the key marks this as a scheduled cron session
    pub fn is_cron_key(&self) -> bool {
        self.key.contains(":cron:")
    }

    /// Whether the kind/channel pair marks this as cron-like
    pub fn is_cron_like(&self) -> bool {
        self.kind.as_deref() == Some("other") && self.channel.as_deref() == Some("unknown")
    }

    /// Display name derived from the key's second segment.
    ///
    /// `agent:market-research:discord` becomes `Market Research`; a missing
    /// or empty segment becomes `Unknown`.
    pub fn agent_name(&self) -> String {
        let segment = match self.key.split(':').nth(1) {
            Some(s) if !s.is_empty() => s,
            _ => "unknown",
        };
        segment
            .split('-')
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Final `/`-segment of the model id
    pub fn model_short(&self) -> Option<&str> {
        self.model
            .as_deref()
            .and_then(|m| m.rsplit('/').next())
            .filter(|m| !m.is_empty())
    }
}

/// Top-level shape of the CLI's JSON session listing
#[derive(Debug, Clone, Deserialize)]
pub struct SessionListing {
    /// All sessions known to the runtime
    #[serde(default)]
    pub sessions: Vec<Session>,
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
