use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::patch::Patch;
use crate::entities::validation::{
    MAX_TITLE_LENGTH, validate_patch_slug, validate_patch_tags, validate_patch_title,
    validate_patch_url, validate_slug, validate_tags, validate_title, validate_url,
};
use crate::store::Record;

/// Lifecycle state controlling public visibility. Any transition is allowed,
/// including `published` back to `draft`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// A blog post as persisted in `posts.json`. Field names are camelCase on
/// disk and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,

    /// Stamped the first time the post reaches `published`; never re-stamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub status: PostStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

impl Record for Post {
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

/// Creation payload. `id` and timestamps are never accepted from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    pub content: String,

    #[serde(default)]
    pub excerpt: String,

    /// Derived from the title when absent.
    #[serde(default)]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub status: PostStatus,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub cover_image: Option<String>,
}

/// Merge-style update: absent keys keep their prior values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(custom(function = "validate_patch_title"))]
    pub title: Patch<String>,

    pub content: Patch<String>,

    pub excerpt: Patch<String>,

    #[validate(custom(function = "validate_patch_slug"))]
    pub slug: Patch<String>,

    #[validate(custom(function = "validate_patch_tags"))]
    pub tags: Patch<Vec<String>>,

    pub featured: Patch<bool>,

    pub status: Patch<PostStatus>,

    pub published_at: Patch<DateTime<Utc>>,

    #[validate(custom(function = "validate_patch_url"))]
    pub cover_image: Patch<String>,
}

impl UpdatePostRequest {
    /// Shallow-merges the supplied fields onto an existing post. `updated_at`
    /// is refreshed by the store, not here.
    pub fn apply(&self, post: &mut Post) {
        self.title.overwrite(&mut post.title);
        self.content.overwrite(&mut post.content);
        self.excerpt.overwrite(&mut post.excerpt);
        self.slug.overwrite(&mut post.slug);
        self.tags.overwrite(&mut post.tags);
        self.featured.overwrite(&mut post.featured);
        self.status.overwrite(&mut post.status);
        self.published_at.apply_to(&mut post.published_at);
        self.cover_image.apply_to(&mut post.cover_image);
    }
}
