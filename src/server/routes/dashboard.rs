//! Combined dashboard snapshot endpoint
//!
//! This module assembles the agent, cost, and service health summaries
//! into the single payload consumed by the dashboard page and its live
//! stream.

use crate::core::costs::CostReport;
use crate::core::health::AggregateHealth;
use crate::core::sessions::ActivityReport;
use crate::server::sse::dashboard_stream;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

/// Everything the dashboard page renders, gathered in one round
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// When the snapshot was assembled
    pub timestamp: DateTime<Utc>,
    /// Agent activity summary
    pub agents: ActivityReport,
    /// Token cost metrics
    pub costs: CostReport,
    /// Aggregated service health
    pub health: AggregateHealth,
}

/// Gather a full dashboard snapshot from the probe and session sources
///
/// Probes and the session fetch run concurrently. A failing session
/// source degrades the agent and cost sections in place; a probe
/// failure fails the whole snapshot since it means the endpoint
/// configuration is unusable.
pub async fn build_snapshot(state: &AppState) -> Result<DashboardSnapshot> {
    let endpoints = &state.config.dashboard.services.endpoints;

    let (health, sessions) = tokio::join!(
        state.prober.probe_all(endpoints),
        state.sessions.sessions()
    );

    let health = health?;
    let now = Utc::now();

    let (agents, costs) = match sessions {
        Ok(sessions) => (
            ActivityReport::build(&sessions, now),
            CostReport::build(&sessions, state.config.pricing(), now),
        ),
        Err(e) => {
            warn!("Sessions unavailable for dashboard snapshot: {}", e);
            (
                ActivityReport::unavailable("Could not fetch agent activity", now),
                CostReport::unavailable(
                    state.config.pricing(),
                    "Could not fetch cost metrics",
                    now,
                ),
            )
        }
    };

    Ok(DashboardSnapshot {
        timestamp: now,
        agents,
        costs,
        health,
    })
}

/// Serve a one-shot dashboard snapshot
/// GET /api/dashboard
pub async fn dashboard(data: web::Data<AppState>) -> Result<HttpResponse> {
    debug!("Dashboard snapshot requested");

    let snapshot = build_snapshot(data.get_ref()).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/dashboard")
            .route("", web::get().to(dashboard))
            .route("/stream", web::get().to(dashboard_stream)),
    );
}
