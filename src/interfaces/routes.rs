use actix_web::{HttpResponse, web};

use crate::handlers::home::home;

mod admin;
mod auth;
mod posts;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(auth::config_routes)
            .configure(posts::config_routes)
            .configure(projects::config_routes)
            .configure(admin::config_routes),
    );

    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "Resource not found"}))
}
