//! Dashboard settings and their shared store
//!
//! Settings are grouped into sections (alerts, monitoring, services,
//! agents) and live in a single guarded cell. Handlers take snapshots and
//! merge patches; the SSE loop reads the refresh cadence from the store on
//! every cycle so changes apply to streams already in flight.
//!
//! # Module Structure
//!
//! - `types` - Settings sections, defaults, and patch shapes
//! - `store` - The concurrency-safe store
//! - `tests` - Test suite for defaults, patching, and the store

pub mod store;
pub mod types;

pub use store::{SettingsSnapshot, SettingsStore};
pub use types::{
    AgentSettings, AlertSettings, DashboardSettings, MonitoringSettings, ServiceSettings,
    SettingsPatch,
};
