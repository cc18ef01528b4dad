//! Utility modules for the dashboard service
//!
//! - **error**: the crate-wide error type and HTTP mapping
//! - **time**: timestamp helpers shared by the activity and cost reports

pub mod error;
pub mod time;

pub use error::{DashboardError, Result};
