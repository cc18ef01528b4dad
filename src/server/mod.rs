//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod routes;
pub mod sse;

// Modular server components
pub mod builder;
mod handlers;
pub mod server;
pub mod state;
mod utils;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
