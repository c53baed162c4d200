use portfolio_cms::entities::patch::Patch;
use portfolio_cms::entities::post::{NewPostRequest, PostStatus, UpdatePostRequest};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::json_repo::JsonPostRepo;
use portfolio_cms::repositories::posts::PostRepository;
use portfolio_cms::use_cases::posts::PostHandler;
use tempfile::TempDir;

fn new_post(title: &str, status: PostStatus) -> NewPostRequest {
    NewPostRequest {
        title: title.to_string(),
        content: format!("Body of {title}"),
        excerpt: "An excerpt".to_string(),
        slug: None,
        tags: vec!["rust".to_string(), "web".to_string()],
        featured: false,
        status,
        published_at: None,
        cover_image: None,
    }
}

fn repo_in(dir: &TempDir) -> JsonPostRepo {
    JsonPostRepo::new(dir.path(), true)
}

#[tokio::test]
async fn create_draft_leaves_publish_stamp_unset() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let post = repo.create(new_post("A Draft", PostStatus::Draft)).await.unwrap();

    assert_eq!(post.status, PostStatus::Draft);
    assert!(post.published_at.is_none());
    assert!(!post.id.is_empty());
}

#[tokio::test]
async fn create_published_stamps_immediately() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let post = repo
        .create(new_post("Live Right Away", PostStatus::Published))
        .await
        .unwrap();

    assert_eq!(post.status, PostStatus::Published);
    assert!(post.published_at.is_some());
}

#[tokio::test]
async fn slug_defaults_from_title() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let post = repo
        .create(new_post("Hello, World! 2024", PostStatus::Draft))
        .await
        .unwrap();
    assert_eq!(post.slug, "hello-world-2024");

    let mut with_slug = new_post("Another", PostStatus::Draft);
    with_slug.slug = Some("my-custom-slug".to_string());
    let post = repo.create(with_slug).await.unwrap();
    assert_eq!(post.slug, "my-custom-slug");
}

#[tokio::test]
async fn publish_stamps_once() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let post = repo.create(new_post("Slow Burn", PostStatus::Draft)).await.unwrap();
    assert!(post.published_at.is_none());

    let publish = UpdatePostRequest {
        status: Patch::Set(PostStatus::Published),
        ..Default::default()
    };
    let published = repo.update(&post.id, &publish).await.unwrap();
    let stamp = published.published_at.expect("publish should stamp");

    // Back to draft: the stamp survives.
    let unpublish = UpdatePostRequest {
        status: Patch::Set(PostStatus::Draft),
        ..Default::default()
    };
    let drafted = repo.update(&post.id, &unpublish).await.unwrap();
    assert_eq!(drafted.published_at, Some(stamp));

    // Publishing again does not re-stamp.
    let republished = repo.update(&post.id, &publish).await.unwrap();
    assert_eq!(republished.published_at, Some(stamp));
}

#[tokio::test]
async fn update_is_a_merge_not_a_replace() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut request = new_post("Merge Me", PostStatus::Draft);
    request.cover_image = Some("https://example.com/cover.png".to_string());
    let post = repo.create(request).await.unwrap();

    let changes = UpdatePostRequest {
        title: Patch::Set("New Title".to_string()),
        ..Default::default()
    };
    let updated = repo.update(&post.id, &changes).await.unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.content, post.content);
    assert_eq!(updated.excerpt, post.excerpt);
    assert_eq!(updated.slug, post.slug);
    assert_eq!(updated.tags, post.tags);
    assert_eq!(updated.cover_image, post.cover_image);
    assert_eq!(updated.status, post.status);
    assert!(updated.updated_at >= post.updated_at);
}

#[tokio::test]
async fn explicit_null_clears_optional_fields() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut request = new_post("Cover Story", PostStatus::Draft);
    request.cover_image = Some("https://example.com/cover.png".to_string());
    let post = repo.create(request).await.unwrap();

    let changes = UpdatePostRequest {
        cover_image: Patch::Clear,
        ..Default::default()
    };
    let updated = repo.update(&post.id, &changes).await.unwrap();
    assert!(updated.cover_image.is_none());
}

#[tokio::test]
async fn missing_ids_surface_as_not_found() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let err = repo.get_by_id("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = repo
        .update(
            "missing",
            &UpdatePostRequest {
                title: Patch::Set("X".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = repo.delete("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn public_listing_contains_only_published_posts_in_order() {
    let dir = TempDir::new().unwrap();
    let handler = PostHandler::new(repo_in(&dir));

    handler
        .create_post(new_post("First Published", PostStatus::Published))
        .await
        .unwrap();
    handler
        .create_post(new_post("Hidden Draft", PostStatus::Draft))
        .await
        .unwrap();
    handler
        .create_post(new_post("Second Published", PostStatus::Published))
        .await
        .unwrap();

    let public = handler.list_posts(true).await.unwrap();
    let slugs: Vec<&str> = public.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first-published", "second-published"]);

    let all = handler.list_posts(false).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn public_slug_lookup_hides_drafts() {
    let dir = TempDir::new().unwrap();
    let handler = PostHandler::new(repo_in(&dir));

    handler
        .create_post(new_post("Secret Draft", PostStatus::Draft))
        .await
        .unwrap();

    let err = handler
        .get_published_post_by_slug("secret-draft")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
