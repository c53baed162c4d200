use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::patch::Patch;
use crate::entities::validation::{
    MAX_TITLE_LENGTH, validate_patch_slug, validate_patch_title, validate_patch_url,
    validate_slug, validate_title, validate_url,
};
use crate::store::Record;

/// A portfolio project as persisted in `projects.json`. Projects carry no
/// draft/published state: every stored project is publicly visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content: String,

    /// Derived from the title when absent.
    #[serde(default)]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_patch_title"))]
    pub title: Patch<String>,

    pub description: Patch<String>,

    pub content: Patch<String>,

    #[validate(custom(function = "validate_patch_slug"))]
    pub slug: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub github_url: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub live_url: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub image_url: Patch<String>,

    pub technologies: Patch<Vec<String>>,

    pub featured: Patch<bool>,
}

impl UpdateProjectRequest {
    /// Shallow-merges the supplied fields onto an existing project.
    /// `created_at` is immutable; `updated_at` is refreshed by the store.
    pub fn apply(&self, project: &mut Project) {
        self.title.overwrite(&mut project.title);
        self.description.overwrite(&mut project.description);
        self.content.overwrite(&mut project.content);
        self.slug.overwrite(&mut project.slug);
        self.github_url.apply_to(&mut project.github_url);
        self.live_url.apply_to(&mut project.live_url);
        self.image_url.apply_to(&mut project.image_url);
        self.technologies.overwrite(&mut project.technologies);
        self.featured.overwrite(&mut project.featured);
    }
}
