pub mod auth;
pub mod extractors;
pub mod posts;
pub mod projects;
