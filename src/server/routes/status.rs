//! Service status endpoint
//!
//! This module exposes the aggregated health of the monitored local
//! services.

use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure service status routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/services/status", web::get().to(service_status));
}

/// Probe every configured service endpoint and return the merged result
/// GET /api/services/status
///
/// Endpoints that fail to respond are reported as offline entries; the
/// response keeps the configured endpoint order.
pub async fn service_status(data: web::Data<AppState>) -> Result<HttpResponse> {
    debug!("Service status requested");

    let endpoints = &data.config.dashboard.services.endpoints;
    let aggregate = data.prober.probe_all(endpoints).await?;

    Ok(HttpResponse::Ok().json(aggregate))
}
