//! Agent activity summarization
//!
//! Reshapes raw session records into the activity feed the dashboard
//! renders: the most recent agents, their active/idle state, and a token
//! tally across every session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::sessions::types::Session;
use crate::utils::time::time_ago;

/// Sessions newer than this count as active
const ACTIVE_WINDOW_MS: i64 = 5 * 60 * 1_000;

/// Rough token budget of one completed task
const TOKENS_PER_TASK: u64 = 5_000;

/// Maximum number of agents shown in the feed
const MAX_AGENTS: usize = 15;

/// Agent classification in the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Interactive agent session
    Agent,
    /// Scheduled background session
    Cron,
}

/// Whether the agent was seen recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Seen within the active window
    Active,
    /// No recent activity
    Idle,
}

/// One row of the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActivity {
    /// Session identifier
    pub id: String,
    /// Human-readable agent name
    pub name: String,
    /// Agent classification
    #[serde(rename = "type")]
    pub kind: AgentKind,
    /// Active or idle
    pub status: AgentStatus,
    /// Humanized time since last activity
    pub last_active: String,
    /// Short model name, `unknown` when the session has none
    pub model: String,
    /// Lifetime token count
    pub tokens: u64,
    /// Estimated completed tasks
    pub tasks: u64,
    /// Last activity timestamp
    pub updated: DateTime<Utc>,
}

impl AgentActivity {
    fn from_session(session: &Session, now: DateTime<Utc>) -> Self {
        let updated = session.updated_at_utc();
        let idle_ms = now.signed_duration_since(updated).num_milliseconds();

        Self {
            id: session.session_id.clone(),
            name: session.agent_name(),
            kind: if session.is_cron_like() {
                AgentKind::Cron
            } else {
                AgentKind::Agent
            },
            status: if idle_ms < ACTIVE_WINDOW_MS {
                AgentStatus::Active
            } else {
                AgentStatus::Idle
            },
            last_active: time_ago(now, updated),
            model: session.model_short().unwrap_or("unknown").to_string(),
            tokens: session.total_tokens,
            tasks: session.total_tokens.div_ceil(TOKENS_PER_TASK),
            updated,
        }
    }
}

/// Aggregate token statistics across all sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    /// Tokens summed over every session, cron included
    pub total_tokens: u64,
}

/// The activity feed served to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    /// All sessions known to the runtime, before any filtering
    pub total_agents: usize,
    /// Agents in the feed seen within the active window
    pub active_now: usize,
    /// When this report was built
    pub last_update: DateTime<Utc>,
    /// Most recent agents, newest first, capped
    pub agents: Vec<AgentActivity>,
    /// Token statistics
    pub stats: ActivityStats,
    /// Present when the session source failed and the report is zeroed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActivityReport {
    /// Build the feed from raw sessions.
    ///
    /// Cron-keyed sessions are excluded from the feed but still count toward
    /// `total_agents` and the token tally.
    pub fn build(sessions: &[Session], now: DateTime<Utc>) -> Self {
        let mut recent: Vec<&Session> = sessions.iter().filter(|s| !s.is_cron_key()).collect();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(MAX_AGENTS);

        let agents: Vec<AgentActivity> = recent
            .iter()
            .map(|s| AgentActivity::from_session(s, now))
            .collect();
        let active_now = agents
            .iter()
            .filter(|a| a.status == AgentStatus::Active)
            .count();
        let total_tokens = sessions.iter().map(|s| s.total_tokens).sum();

        Self {
            total_agents: sessions.len(),
            active_now,
            last_update: now,
            agents,
            stats: ActivityStats { total_tokens },
            error: None,
        }
    }

    /// Zeroed report for when the session source is unavailable
    pub fn unavailable(error: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            total_agents: 0,
            active_now: 0,
            last_update: now,
            agents: Vec::new(),
            stats: ActivityStats { total_tokens: 0 },
            error: Some(error.into()),
        }
    }
}
