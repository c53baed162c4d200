use std::collections::HashSet;

use chrono::Utc;
use portfolio_cms::entities::post::{Post, PostStatus};
use portfolio_cms::store::{JsonStore, StoreError};
use tempfile::TempDir;

fn sample_post(title: &str, slug: &str) -> Post {
    Post {
        id: String::new(),
        title: title.to_string(),
        content: format!("Body of {title}"),
        excerpt: "An excerpt".to_string(),
        slug: slug.to_string(),
        published_at: None,
        updated_at: Utc::now(),
        tags: vec!["rust".to_string()],
        featured: false,
        status: PostStatus::Draft,
        cover_image: None,
    }
}

fn store_in(dir: &TempDir, lenient: bool) -> JsonStore<Post> {
    JsonStore::new(dir.path().join("posts.json"), lenient)
}

#[tokio::test]
async fn missing_file_reads_as_empty_and_is_materialized() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    let records = store.load().await.unwrap();
    assert!(records.is_empty());

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "[]");
}

#[tokio::test]
async fn save_then_load_round_trips_field_for_field_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    let mut posts = vec![
        sample_post("First", "first"),
        sample_post("Second", "second"),
        sample_post("Third", "third"),
    ];
    for (i, post) in posts.iter_mut().enumerate() {
        post.id = format!("id-{i}");
        post.tags = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    }
    posts[1].status = PostStatus::Published;
    posts[1].published_at = Some(Utc::now());
    posts[2].cover_image = Some("https://example.com/cover.png".to_string());

    store.save(&posts).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, posts);
}

#[tokio::test]
async fn insert_assigns_fresh_nonempty_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    let mut seen = HashSet::new();
    for i in 0..20 {
        let stored = store
            .insert(sample_post(&format!("Post {i}"), &format!("post-{i}")))
            .await
            .unwrap();
        assert!(!stored.id.is_empty());
        assert!(seen.insert(stored.id.clone()), "duplicate id {}", stored.id);
    }

    assert_eq!(store.load().await.unwrap().len(), 20);
}

#[tokio::test]
async fn update_applies_patch_and_refreshes_updated_at() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    let stored = store.insert(sample_post("Original", "original")).await.unwrap();
    let before = stored.updated_at;

    let updated = store
        .update_by_id(&stored.id, |post| post.title = "Changed".to_string())
        .await
        .unwrap()
        .expect("record should exist");

    assert_eq!(updated.title, "Changed");
    assert!(updated.updated_at >= before);
    // Untouched fields keep their prior values.
    assert_eq!(updated.content, stored.content);
    assert_eq!(updated.excerpt, stored.excerpt);
    assert_eq!(updated.slug, stored.slug);
    assert_eq!(updated.tags, stored.tags);
    assert_eq!(updated.status, stored.status);

    let reloaded = store.find_by_id(&stored.id).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    store.insert(sample_post("Only", "only")).await.unwrap();

    let result = store
        .update_by_id("nope", |post| post.title = "X".to_string())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_removes_exactly_one_and_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    let a = store.insert(sample_post("A", "a")).await.unwrap();
    let b = store.insert(sample_post("B", "b")).await.unwrap();
    let c = store.insert(sample_post("C", "c")).await.unwrap();

    assert!(store.delete_by_id(&b.id).await.unwrap());

    let remaining = store.load().await.unwrap();
    let ids: Vec<&str> = remaining.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![a.id.as_str(), c.id.as_str()]);
}

#[tokio::test]
async fn delete_unknown_id_is_false_and_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    store.insert(sample_post("Keep me", "keep-me")).await.unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    assert!(!store.delete_by_id("missing").await.unwrap());

    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn find_by_slug_returns_first_match() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, true);

    // Slug uniqueness is not enforced; the first writer wins lookups.
    let first = store.insert(sample_post("One", "shared")).await.unwrap();
    let second = store.insert(sample_post("Two", "shared")).await.unwrap();
    assert_ne!(first.id, second.id);

    let found = store.find_by_slug("shared").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
}

#[tokio::test]
async fn corrupt_file_degrades_to_empty_when_lenient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");
    std::fs::write(&path, "this is not json").unwrap();

    let store: JsonStore<Post> = JsonStore::new(&path, true);
    let records = store.load().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn corrupt_file_is_an_error_when_strict() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");
    std::fs::write(&path, "{\"not\": \"an array\"").unwrap();

    let store: JsonStore<Post> = JsonStore::new(&path, false);
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}
