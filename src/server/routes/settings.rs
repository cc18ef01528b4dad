//! Dashboard settings endpoints
//!
//! This module exposes the in-memory settings store for reading and
//! section-wise updates.

use crate::server::state::AppState;
use crate::settings::SettingsPatch;
use actix_web::{HttpResponse, web};
use tracing::{debug, info};

/// Configure settings routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/settings")
            .route("", web::get().to(get_settings))
            .route("", web::post().to(update_settings)),
    );
}

/// Read the current settings
/// GET /api/settings
pub async fn get_settings(data: web::Data<AppState>) -> HttpResponse {
    debug!("Settings requested");

    HttpResponse::Ok().json(data.settings.snapshot())
}

/// Apply a partial settings update
/// POST /api/settings
///
/// Only the fields present in the payload change; everything else keeps
/// its current value. Returns the merged settings.
pub async fn update_settings(
    data: web::Data<AppState>,
    payload: web::Json<SettingsPatch>,
) -> HttpResponse {
    info!("Settings update requested");

    let snapshot = data.settings.apply(payload.into_inner());
    HttpResponse::Ok().json(snapshot)
}
