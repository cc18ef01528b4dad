//! End-to-end tests for stackboard
//!
//! These tests boot the full server on a real local port and talk to it
//! over HTTP. Run with: cargo test -- --ignored

pub mod server_boot;
