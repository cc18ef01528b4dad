//! Agent session ingestion and activity shaping
//!
//! Sessions come from the agent runtime's CLI as JSON. This module owns the
//! session record type, the source abstraction that fetches the listing, and
//! the summarizer that turns raw sessions into the dashboard's activity feed.
//!
//! # Module Structure
//!
//! - `types` - Session records and the CLI listing envelope
//! - `source` - The `SessionSource` trait and its CLI implementation
//! - `activity` - Activity feed shaping
//! - `tests` - Test suite for parsing, sourcing, and shaping

pub mod activity;
pub mod source;
pub mod types;

pub use activity::{ActivityReport, ActivityStats, AgentActivity, AgentKind, AgentStatus};
pub use source::{CliSessionSource, SessionSource};
pub use types::{Session, SessionListing};
