//! Test fixtures and stub collaborators

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stackboard::config::Config;
use stackboard::core::health::{EndpointSpec, HealthProber};
use stackboard::core::sessions::{Session, SessionSource};
use stackboard::server::AppState;
use stackboard::settings::SettingsStore;
use stackboard::utils::error::{DashboardError, Result};
use std::sync::Arc;

/// Build a session record with the fields the reports care about
pub fn session(key: &str, model: Option<&str>, tokens: u64, updated_at: DateTime<Utc>) -> Session {
    Session {
        session_id: format!("sess-{key}"),
        key: key.to_string(),
        kind: Some("agent".to_string()),
        channel: Some("discord".to_string()),
        model: model.map(str::to_string),
        total_tokens: tokens,
        updated_at: updated_at.timestamp_millis(),
    }
}

/// Session source that returns a fixed listing
pub struct StaticSource(pub Vec<Session>);

#[async_trait]
impl SessionSource for StaticSource {
    async fn sessions(&self) -> Result<Vec<Session>> {
        Ok(self.0.clone())
    }
}

/// Session source that always fails
pub struct FailingSource;

#[async_trait]
impl SessionSource for FailingSource {
    async fn sessions(&self) -> Result<Vec<Session>> {
        Err(DashboardError::sessions("session CLI unavailable"))
    }
}

/// App state wired to the given probe targets and session source
pub fn app_state(endpoints: Vec<EndpointSpec>, source: Arc<dyn SessionSource>) -> AppState {
    let mut config = Config::default();
    config.dashboard.services.endpoints = endpoints;
    AppState::new(config, HealthProber::new(), source, SettingsStore::new())
}
