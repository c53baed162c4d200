use std::path::Path;

use crate::entities::{post::Post, project::Project};
use crate::store::JsonStore;

pub const POSTS_FILE: &str = "posts.json";
pub const PROJECTS_FILE: &str = "projects.json";

/// Post storage backed by `posts.json` under the configured data directory.
pub struct JsonPostRepo {
    pub(crate) store: JsonStore<Post>,
}

impl JsonPostRepo {
    pub fn new(data_dir: impl AsRef<Path>, lenient_reads: bool) -> Self {
        JsonPostRepo {
            store: JsonStore::new(data_dir.as_ref().join(POSTS_FILE), lenient_reads),
        }
    }
}

/// Project storage backed by `projects.json` under the configured data
/// directory.
pub struct JsonProjectRepo {
    pub(crate) store: JsonStore<Project>,
}

impl JsonProjectRepo {
    pub fn new(data_dir: impl AsRef<Path>, lenient_reads: bool) -> Self {
        JsonProjectRepo {
            store: JsonStore::new(data_dir.as_ref().join(PROJECTS_FILE), lenient_reads),
        }
    }
}
