use portfolio_cms::entities::patch::Patch;
use portfolio_cms::entities::project::{NewProjectRequest, UpdateProjectRequest};
use portfolio_cms::repositories::json_repo::JsonProjectRepo;
use portfolio_cms::repositories::projects::ProjectRepository;
use portfolio_cms::use_cases::projects::ProjectHandler;
use tempfile::TempDir;

fn new_project(title: &str) -> NewProjectRequest {
    NewProjectRequest {
        title: title.to_string(),
        description: "A small tool".to_string(),
        content: "Long-form write-up".to_string(),
        slug: None,
        github_url: Some("https://github.com/example/tool".to_string()),
        live_url: None,
        image_url: None,
        technologies: vec!["rust".to_string(), "actix".to_string()],
        featured: true,
    }
}

#[tokio::test]
async fn create_stamps_created_at() {
    let dir = TempDir::new().unwrap();
    let repo = JsonProjectRepo::new(dir.path(), true);

    let project = repo.create(new_project("My Tool")).await.unwrap();

    assert!(!project.id.is_empty());
    assert_eq!(project.slug, "my-tool");
    assert_eq!(project.created_at, project.updated_at);
}

#[tokio::test]
async fn update_preserves_created_at_and_merges() {
    let dir = TempDir::new().unwrap();
    let repo = JsonProjectRepo::new(dir.path(), true);

    let project = repo.create(new_project("My Tool")).await.unwrap();

    let changes = UpdateProjectRequest {
        description: Patch::Set("A bigger tool".to_string()),
        github_url: Patch::Clear,
        ..Default::default()
    };
    let updated = repo.update(&project.id, &changes).await.unwrap();

    assert_eq!(updated.description, "A bigger tool");
    assert!(updated.github_url.is_none());
    assert_eq!(updated.title, project.title);
    assert_eq!(updated.technologies, project.technologies);
    assert_eq!(updated.created_at, project.created_at);
    assert!(updated.updated_at >= project.updated_at);
}

#[tokio::test]
async fn every_stored_project_is_listed() {
    let dir = TempDir::new().unwrap();
    let handler = ProjectHandler::new(JsonProjectRepo::new(dir.path(), true));

    handler.create_project(new_project("One")).await.unwrap();
    handler.create_project(new_project("Two")).await.unwrap();

    // No draft/published distinction for projects.
    let listed = handler.list_projects().await.unwrap();
    let slugs: Vec<&str> = listed.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["one", "two"]);
}

#[tokio::test]
async fn delete_removes_the_project() {
    let dir = TempDir::new().unwrap();
    let repo = JsonProjectRepo::new(dir.path(), true);

    let keep = repo.create(new_project("Keep")).await.unwrap();
    let drop = repo.create(new_project("Drop")).await.unwrap();

    repo.delete(&drop.id).await.unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}
