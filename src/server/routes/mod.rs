//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod agents;
pub mod costs;
pub mod dashboard;
pub mod settings;
pub mod status;
