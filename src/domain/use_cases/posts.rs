use validator::Validate;

use crate::entities::post::{NewPostRequest, Post, UpdatePostRequest};
use crate::errors::AppError;
use crate::repositories::posts::PostRepository;

pub struct PostHandler<R>
where
    R: PostRepository,
{
    pub post_repo: R,
}

impl<R> PostHandler<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: R) -> Self {
        PostHandler { post_repo }
    }

    /// Lists posts in stored order. `published_only` selects the public
    /// projection, which hides drafts but preserves relative order.
    pub async fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, AppError> {
        let mut posts = self.post_repo.list().await?;
        if published_only {
            posts.retain(Post::is_published);
        }
        Ok(posts)
    }

    pub async fn get_post_by_id(&self, id: &str) -> Result<Post, AppError> {
        self.post_repo.get_by_id(id).await
    }

    /// Slug lookup for the public site: drafts are invisible, so a matching
    /// draft reads as not-found.
    pub async fn get_published_post_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        let post = self.post_repo.get_by_slug(slug).await?;
        if !post.is_published() {
            return Err(AppError::NotFound("Post not found".into()));
        }
        Ok(post)
    }

    /// Validates and creates a new post.
    pub async fn create_post(&self, post: NewPostRequest) -> Result<Post, AppError> {
        post.validate()?;
        self.post_repo.create(post).await
    }

    /// Validates and merges a partial update onto an existing post.
    pub async fn update_post(
        &self,
        id: &str,
        changes: &UpdatePostRequest,
    ) -> Result<Post, AppError> {
        changes.validate()?;
        self.post_repo.update(id, changes).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        self.post_repo.delete(id).await
    }
}
