use validator::Validate;

use crate::entities::project::{NewProjectRequest, Project, UpdateProjectRequest};
use crate::errors::AppError;
use crate::repositories::projects::ProjectRepository;

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// All stored projects, in stored order. Unlike posts there is no
    /// visibility filter: a created project is public immediately.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list().await
    }

    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        self.project_repo.get_by_id(id).await
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.project_repo.get_by_slug(slug).await
    }

    pub async fn create_project(&self, project: NewProjectRequest) -> Result<Project, AppError> {
        project.validate()?;
        self.project_repo.create(project).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        changes: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        changes.validate()?;
        self.project_repo.update(id, changes).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        self.project_repo.delete(id).await
    }
}
