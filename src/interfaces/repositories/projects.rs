use async_trait::async_trait;
use chrono::Utc;

use crate::entities::project::{NewProjectRequest, Project, UpdateProjectRequest};
use crate::errors::AppError;
use crate::repositories::json_repo::JsonProjectRepo;
use crate::utils::idgen::generate_slug;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, AppError>;
    async fn get_by_id(&self, id: &str) -> Result<Project, AppError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Project, AppError>;
    async fn create(&self, project: NewProjectRequest) -> Result<Project, AppError>;
    async fn update(&self, id: &str, changes: &UpdateProjectRequest)
    -> Result<Project, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
impl ProjectRepository for JsonProjectRepo {
    async fn list(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.store.load().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Project, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn create(&self, project: NewProjectRequest) -> Result<Project, AppError> {
        let now = Utc::now();

        let slug = match project.slug {
            Some(ref s) if !s.trim().is_empty() => s.clone(),
            _ => generate_slug(&project.title),
        };

        let record = Project {
            id: String::new(), // assigned by the store
            title: project.title,
            description: project.description,
            content: project.content,
            slug,
            github_url: project.github_url,
            live_url: project.live_url,
            image_url: project.image_url,
            technologies: project.technologies,
            featured: project.featured,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert(record).await?)
    }

    async fn update(
        &self,
        id: &str,
        changes: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let updated = self
            .store
            .update_by_id(id, |project| changes.apply(project))
            .await?;

        updated.ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Project not found".into()))
        }
    }
}
