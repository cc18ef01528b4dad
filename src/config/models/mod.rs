//! Configuration data models
//!
//! This module defines all configuration structures used throughout the
//! dashboard service.

pub mod dashboard;
pub mod pricing;
pub mod server;
pub mod services;
pub mod sessions;

// Re-export all configuration types
pub use dashboard::*;
pub use pricing::*;
pub use server::*;
pub use services::*;
pub use sessions::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default listen port
pub fn default_port() -> u16 {
    8090
}

/// Default for flags that are on unless disabled
pub fn default_true() -> bool {
    true
}
