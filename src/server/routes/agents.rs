//! Agent activity endpoint
//!
//! This module reshapes CLI session listings into the agent activity
//! summary rendered by the dashboard.

use crate::core::sessions::ActivityReport;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::{debug, warn};

/// Configure agent activity routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/agents/activity", web::get().to(agent_activity));
}

/// Summarize agent sessions from the CLI
/// GET /api/agents/activity
///
/// When the session source fails, responds 500 with a zeroed report
/// carrying an error message so the dashboard can render a degraded
/// state instead of breaking.
pub async fn agent_activity(data: web::Data<AppState>) -> HttpResponse {
    debug!("Agent activity requested");

    match data.sessions.sessions().await {
        Ok(sessions) => {
            let report = ActivityReport::build(&sessions, chrono::Utc::now());
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            warn!("Failed to fetch agent sessions: {}", e);
            let report =
                ActivityReport::unavailable("Could not fetch agent activity", chrono::Utc::now());
            HttpResponse::InternalServerError().json(report)
        }
    }
}
