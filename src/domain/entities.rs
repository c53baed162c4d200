pub mod auth;
pub mod patch;
pub mod post;
pub mod project;
pub mod validation;
