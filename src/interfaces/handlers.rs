pub mod auth;
pub mod home;
pub mod posts;
pub mod projects;
pub mod system;
