use async_trait::async_trait;
use chrono::Utc;

use crate::entities::post::{NewPostRequest, Post, PostStatus, UpdatePostRequest};
use crate::errors::AppError;
use crate::repositories::json_repo::JsonPostRepo;
use crate::utils::idgen::generate_slug;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, AppError>;
    async fn get_by_id(&self, id: &str) -> Result<Post, AppError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError>;
    async fn create(&self, post: NewPostRequest) -> Result<Post, AppError>;
    async fn update(&self, id: &str, changes: &UpdatePostRequest) -> Result<Post, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
impl PostRepository for JsonPostRepo {
    async fn list(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.store.load().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        self.store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    async fn create(&self, post: NewPostRequest) -> Result<Post, AppError> {
        let now = Utc::now();

        let slug = match post.slug {
            Some(ref s) if !s.trim().is_empty() => s.clone(),
            _ => generate_slug(&post.title),
        };

        // A post born published gets its publish stamp immediately; drafts
        // stay unstamped until they first transition to published.
        let published_at = match post.status {
            PostStatus::Published => post.published_at.or(Some(now)),
            PostStatus::Draft => post.published_at,
        };

        let record = Post {
            id: String::new(), // assigned by the store
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            slug,
            published_at,
            updated_at: now,
            tags: post.tags,
            featured: post.featured,
            status: post.status,
            cover_image: post.cover_image,
        };

        Ok(self.store.insert(record).await?)
    }

    async fn update(&self, id: &str, changes: &UpdatePostRequest) -> Result<Post, AppError> {
        let updated = self
            .store
            .update_by_id(id, |post| {
                changes.apply(post);

                // Publish stamps once: only a post reaching published with no
                // prior stamp gets one. Reverting to draft keeps the stamp.
                if post.is_published() && post.published_at.is_none() {
                    post.published_at = Some(Utc::now());
                }
            })
            .await?;

        updated.ok_or_else(|| AppError::NotFound("Post not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Post not found".into()))
        }
    }
}
