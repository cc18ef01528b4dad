//! Cost metrics endpoint
//!
//! This module derives token spend metrics from CLI session listings.

use crate::core::costs::CostReport;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::{debug, warn};

/// Configure cost metrics routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/costs", web::get().to(cost_metrics));
}

/// Derive cost metrics from agent sessions
/// GET /api/costs
///
/// When the session source fails, responds 500 with a zeroed report
/// carrying an error message.
pub async fn cost_metrics(data: web::Data<AppState>) -> HttpResponse {
    debug!("Cost metrics requested");

    let pricing = data.config.pricing();

    match data.sessions.sessions().await {
        Ok(sessions) => {
            let report = CostReport::build(&sessions, pricing, chrono::Utc::now());
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            warn!("Failed to fetch sessions for cost metrics: {}", e);
            let report =
                CostReport::unavailable(pricing, "Could not fetch cost metrics", chrono::Utc::now());
            HttpResponse::InternalServerError().json(report)
        }
    }
}
