use actix_web::web;

use crate::handlers::posts;

/// Public blog surface: published posts only.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(web::resource("").route(web::get().to(posts::list_published_posts)))
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(posts::get_published_post_by_slug)),
            ),
    );
}
