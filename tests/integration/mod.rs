//! Integration tests for stackboard
//!
//! These tests exercise the prober against mock HTTP services and the
//! API routes against an in-process Actix app.

pub mod api_tests;
pub mod health_probe_tests;
