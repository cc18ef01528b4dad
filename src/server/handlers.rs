//! HTTP request handlers
//!
//! This module provides HTTP request handlers for basic endpoints.

use actix_web::{HttpResponse, Result};
use serde_json::json;

/// Health check endpoint for the dashboard process itself
pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
