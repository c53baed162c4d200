use std::time::Duration;

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;

use crate::constants::START_TIME;
use crate::entities::auth::AdminSession;
use crate::AppState;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    storage: String,
    version: String,
}

#[get("/health")]
pub async fn admin_health_check(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    // Probing both collections exercises the same read path the site uses.
    let posts_ok = state.post_handler.list_posts(false).await.is_ok();
    let projects_ok = state.project_handler.list_projects().await.is_ok();
    let storage = if posts_ok && projects_ok {
        "OK"
    } else {
        "Unavailable"
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        storage: storage.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
