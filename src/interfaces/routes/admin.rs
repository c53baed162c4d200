use actix_web::web;

use crate::handlers::{posts, projects, system::admin_health_check};

/// Admin CMS surface. The admin middleware requires a bearer token on every
/// route in this scope.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin_health_check)
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::admin_list_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(posts::admin_get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            )
            .service(
                web::scope("/projects")
                    .service(
                        web::resource("")
                            .route(web::get().to(projects::admin_list_projects))
                            .route(web::post().to(projects::create_project)),
                    )
                    .service(
                        web::resource("/{project_id}")
                            .route(web::get().to(projects::admin_get_project))
                            .route(web::put().to(projects::update_project))
                            .route(web::delete().to(projects::delete_project)),
                    ),
            ),
    );
}
