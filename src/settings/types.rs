//! Dashboard settings sections and patch shapes
//!
//! Settings travel over the wire in camelCase. Interval and threshold
//! fields are milliseconds. Patches mirror the settings sections with every
//! field optional; absent fields leave the current value untouched and
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Alerting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    /// Monthly cost threshold that triggers an alert, USD
    pub cost_threshold: f64,
    /// Email address alerts are sent to, empty to disable
    pub cost_alert_email: String,
    /// Mirror cost alerts to Slack
    pub cost_alert_slack: bool,
    /// Alert when a probed service goes offline
    pub service_down_alert_enabled: bool,
    /// Idle time after which an agent counts as inactive, milliseconds
    pub agent_inactivity_threshold: u64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            cost_threshold: 300.0,
            cost_alert_email: String::new(),
            cost_alert_slack: false,
            service_down_alert_enabled: true,
            agent_inactivity_threshold: 3_600_000,
        }
    }
}

/// Monitoring and refresh settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSettings {
    /// Serve live updates over the SSE stream
    pub enable_realtime: bool,
    /// Stream refresh cadence, milliseconds
    pub update_interval: u64,
    /// How long history is kept, days
    pub retention_days: u32,
    /// Log verbosity level
    pub log_level: String,
}

impl Default for MonitoringSettings {
    fn default() -> Self {
        Self {
            enable_realtime: true,
            update_interval: 5_000,
            retention_days: 30,
            log_level: "info".to_string(),
        }
    }
}

/// Probed service display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSettings {
    /// Services the UI surfaces, by endpoint name
    pub whitelist: Vec<String>,
    /// UI re-poll cadence for service status, milliseconds
    pub check_interval: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            whitelist: vec![
                "langfuse".to_string(),
                "anythingllm".to_string(),
                "ollama".to_string(),
                "qdrant".to_string(),
                "chroma".to_string(),
                "searxng".to_string(),
            ],
            check_interval: 60_000,
        }
    }
}

/// Agent fleet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSettings {
    /// Maximum agents running at once
    pub max_concurrent: u32,
    /// Model assigned to new agents
    pub default_model: String,
    /// Collect agent telemetry
    pub telemetry_enabled: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            max_concurrent: 8,
            default_model: "claude-3-5-sonnet-20241022".to_string(),
            telemetry_enabled: true,
        }
    }
}

/// All dashboard settings, grouped by section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Alerting section
    pub alerts: AlertSettings,
    /// Monitoring section
    pub monitoring: MonitoringSettings,
    /// Services section
    pub services: ServiceSettings,
    /// Agents section
    pub agents: AgentSettings,
}

impl DashboardSettings {
    /// Merge a patch into these settings, section by section
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(alerts) = patch.alerts {
            self.alerts.apply(alerts);
        }
        if let Some(monitoring) = patch.monitoring {
            self.monitoring.apply(monitoring);
        }
        if let Some(services) = patch.services {
            self.services.apply(services);
        }
        if let Some(agents) = patch.agents {
            self.agents.apply(agents);
        }
    }
}

/// Partial update for [`AlertSettings`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettingsPatch {
    pub cost_threshold: Option<f64>,
    pub cost_alert_email: Option<String>,
    pub cost_alert_slack: Option<bool>,
    pub service_down_alert_enabled: Option<bool>,
    pub agent_inactivity_threshold: Option<u64>,
}

impl AlertSettings {
    fn apply(&mut self, patch: AlertSettingsPatch) {
        if let Some(v) = patch.cost_threshold {
            self.cost_threshold = v;
        }
        if let Some(v) = patch.cost_alert_email {
            self.cost_alert_email = v;
        }
        if let Some(v) = patch.cost_alert_slack {
            self.cost_alert_slack = v;
        }
        if let Some(v) = patch.service_down_alert_enabled {
            self.service_down_alert_enabled = v;
        }
        if let Some(v) = patch.agent_inactivity_threshold {
            self.agent_inactivity_threshold = v;
        }
    }
}

/// Partial update for [`MonitoringSettings`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSettingsPatch {
    pub enable_realtime: Option<bool>,
    pub update_interval: Option<u64>,
    pub retention_days: Option<u32>,
    pub log_level: Option<String>,
}

impl MonitoringSettings {
    fn apply(&mut self, patch: MonitoringSettingsPatch) {
        if let Some(v) = patch.enable_realtime {
            self.enable_realtime = v;
        }
        if let Some(v) = patch.update_interval {
            self.update_interval = v;
        }
        if let Some(v) = patch.retention_days {
            self.retention_days = v;
        }
        if let Some(v) = patch.log_level {
            self.log_level = v;
        }
    }
}

/// Partial update for [`ServiceSettings`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSettingsPatch {
    pub whitelist: Option<Vec<String>>,
    pub check_interval: Option<u64>,
}

impl ServiceSettings {
    fn apply(&mut self, patch: ServiceSettingsPatch) {
        if let Some(v) = patch.whitelist {
            self.whitelist = v;
        }
        if let Some(v) = patch.check_interval {
            self.check_interval = v;
        }
    }
}

/// Partial update for [`AgentSettings`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSettingsPatch {
    pub max_concurrent: Option<u32>,
    pub default_model: Option<String>,
    pub telemetry_enabled: Option<bool>,
}

impl AgentSettings {
    fn apply(&mut self, patch: AgentSettingsPatch) {
        if let Some(v) = patch.max_concurrent {
            self.max_concurrent = v;
        }
        if let Some(v) = patch.default_model {
            self.default_model = v;
        }
        if let Some(v) = patch.telemetry_enabled {
            self.telemetry_enabled = v;
        }
    }
}

/// Partial update across all settings sections
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsPatch {
    /// Alerting changes
    pub alerts: Option<AlertSettingsPatch>,
    /// Monitoring changes
    pub monitoring: Option<MonitoringSettingsPatch>,
    /// Services changes
    pub services: Option<ServiceSettingsPatch>,
    /// Agents changes
    pub agents: Option<AgentSettingsPatch>,
}
