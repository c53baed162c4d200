mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{store, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use repositories::json_repo::{JsonPostRepo, JsonProjectRepo};
use use_cases::{auth::AuthHandler, posts::PostHandler, projects::ProjectHandler};

pub type AppPostHandler = PostHandler<JsonPostRepo>;
pub type AppProjectHandler = ProjectHandler<JsonProjectRepo>;

/// One store handle per backing file, constructed once at process start and
/// shared through actix `web::Data`.
pub struct AppState {
    pub post_handler: AppPostHandler,
    pub project_handler: AppProjectHandler,
    pub auth_handler: AuthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let post_repo = JsonPostRepo::new(&config.data_dir, config.lenient_reads);
        let project_repo = JsonProjectRepo::new(&config.data_dir, config.lenient_reads);

        AppState {
            post_handler: PostHandler::new(post_repo),
            project_handler: ProjectHandler::new(project_repo),
            auth_handler: AuthHandler::new(config),
        }
    }
}
