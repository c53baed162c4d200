pub mod json_repo;
pub mod posts;
pub mod projects;
