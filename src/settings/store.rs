//! Guarded settings cell shared across handlers

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::types::{DashboardSettings, SettingsPatch};

/// Lower bound for the stream cadence so a bad patch cannot spin the loop
const MIN_STREAM_INTERVAL_MS: u64 = 250;

/// Settings plus the moment they last changed
#[derive(Debug, Clone)]
struct SettingsState {
    settings: DashboardSettings,
    last_updated: DateTime<Utc>,
}

/// Point-in-time view of the store, also the settings routes' response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    /// The settings at snapshot time
    pub settings: DashboardSettings,
    /// When any section last changed
    pub last_updated: DateTime<Utc>,
}

/// Concurrency-safe settings store
///
/// Consolidated single lock over the settings and their update timestamp,
/// cloned snapshots out, patches merged in.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    state: Arc<RwLock<SettingsState>>,
}

impl SettingsStore {
    /// Create a store holding the default settings
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SettingsState {
                settings: DashboardSettings::default(),
                last_updated: Utc::now(),
            })),
        }
    }

    /// Clone out the current settings and timestamp
    pub fn snapshot(&self) -> SettingsSnapshot {
        let state = self.state.read();
        SettingsSnapshot {
            settings: state.settings.clone(),
            last_updated: state.last_updated,
        }
    }

    /// Merge a patch and return the resulting snapshot
    pub fn apply(&self, patch: SettingsPatch) -> SettingsSnapshot {
        let mut state = self.state.write();
        state.settings.apply(patch);
        state.last_updated = Utc::now();
        SettingsSnapshot {
            settings: state.settings.clone(),
            last_updated: state.last_updated,
        }
    }

    /// Current SSE cadence, read fresh each cycle so patches apply to
    /// already-running streams
    pub fn stream_interval(&self) -> Duration {
        let interval = self.state.read().settings.monitoring.update_interval;
        Duration::from_millis(interval.max(MIN_STREAM_INTERVAL_MS))
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
