//! HTTP-layer tests driving the store against a mock backend.

use blogstore::post::{CreatePost, PostStatus, UpdatePost};
use blogstore::storage::FileUpload;
use blogstore::{HttpBlogStore, StoreConfig, StoreError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> StoreConfig {
    StoreConfig {
        endpoint: server.uri(),
        project_id: "blog-test".to_string(),
        api_key: Some("server-key".to_string()),
        database_id: "main".to_string(),
        collection_id: "posts".to_string(),
        bucket_id: "media".to_string(),
    }
}

fn connect(server: &MockServer) -> HttpBlogStore {
    HttpBlogStore::connect(&config_for(server)).expect("store should connect")
}

fn document(slug: &str, status: &str) -> serde_json::Value {
    json!({
        "$id": slug,
        "$createdAt": "2026-01-15T09:30:00.000+00:00",
        "$updatedAt": "2026-01-15T09:30:00.000+00:00",
        "title": "Hello",
        "content": "<p>body</p>",
        "featuredImage": null,
        "status": status,
        "userId": "user-1"
    })
}

#[tokio::test]
async fn get_post_decodes_document_and_sends_project_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/main/collections/posts/documents/hello-world"))
        .and(header("X-Appwrite-Project", "blog-test"))
        .and(header("X-Appwrite-Key", "server-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("hello-world", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let store = connect(&server);
    let post = store.get_post("hello-world").await.expect("get should succeed");
    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.status, PostStatus::Active);
    assert_eq!(post.user_id, "user-1");
    assert!(post.featured_image.is_none());
}

#[tokio::test]
async fn get_missing_post_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/main/collections/posts/documents/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = connect(&server);
    let err = store.get_post("missing").await.expect_err("404 should fail");
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn unauthorized_request_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = connect(&server);
    let err = store.get_post("any").await.expect_err("401 should fail");
    assert!(matches!(err, StoreError::Unauthorized(_)));
}

#[tokio::test]
async fn server_error_maps_to_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = connect(&server);
    let err = store.get_active_posts().await.expect_err("500 should fail");
    assert!(matches!(err, StoreError::Transport(_)));
}

#[tokio::test]
async fn create_post_sends_document_key_next_to_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/main/collections/posts/documents"))
        .and(body_partial_json(json!({
            "documentId": "hello-world",
            "data": {
                "title": "Hello",
                "content": "<p>body</p>",
                "status": "active",
                "userId": "user-1"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(document("hello-world", "active")))
        .expect(1)
        .mount(&server)
        .await;

    let store = connect(&server);
    let input = CreatePost {
        slug: "hello-world".to_string(),
        title: "Hello".to_string(),
        content: "<p>body</p>".to_string(),
        featured_image: None,
        status: PostStatus::Active,
        user_id: "user-1".to_string(),
    };
    let post = store.create_post(&input).await.expect("create should succeed");
    assert_eq!(post.slug, "hello-world");
}

#[tokio::test]
async fn create_duplicate_slug_maps_to_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/main/collections/posts/documents"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let store = connect(&server);
    let input = CreatePost {
        slug: "taken".to_string(),
        title: "Hello".to_string(),
        content: String::new(),
        featured_image: None,
        status: PostStatus::Active,
        user_id: "user-1".to_string(),
    };
    let err = store.create_post(&input).await.expect_err("409 should fail");
    assert!(matches!(err, StoreError::Conflict(_)));
}

#[tokio::test]
async fn update_post_patches_replacement_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/databases/main/collections/posts/documents/hello-world"))
        .and(body_partial_json(json!({
            "data": {
                "title": "Updated",
                "content": "new body",
                "featuredImage": null,
                "status": "inactive"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("hello-world", "inactive")))
        .expect(1)
        .mount(&server)
        .await;

    let store = connect(&server);
    let input = UpdatePost {
        title: "Updated".to_string(),
        content: "new body".to_string(),
        featured_image: None,
        status: PostStatus::Inactive,
    };
    let post = store
        .update_post("hello-world", &input)
        .await
        .expect("update should succeed");
    assert_eq!(post.status, PostStatus::Inactive);
}

#[tokio::test]
async fn list_posts_sends_default_filter_and_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/main/collections/posts/documents"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "documents": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = connect(&server);
    let page = store.get_active_posts().await.expect("list should succeed");
    assert_eq!(page.total, 0);

    let requests = server.received_requests().await.expect("requests recorded");
    let queries: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "queries[]")
        .map(|(_, v)| v.into_owned())
        .collect();

    assert_eq!(queries.len(), 3);
    assert!(queries[0].contains(r#""attribute":"status""#));
    assert!(queries[0].contains(r#""values":["active"]"#));
    assert!(queries[1].contains(r#""method":"limit""#));
    assert!(queries[2].contains(r#""method":"offset""#));
}

#[tokio::test]
async fn upload_file_posts_multipart_and_decodes_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/buckets/media/files"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "$id": "f1a2b3c4",
            "$createdAt": "2026-02-01T12:00:00.000+00:00",
            "name": "cover.png",
            "mimeType": "image/png",
            "sizeOriginal": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = connect(&server);
    let file = store
        .upload_file(FileUpload::new("cover.png", "image/png", &b"\x89PNG"[..]))
        .await
        .expect("upload should succeed");
    assert_eq!(file.id, "f1a2b3c4");
    assert_eq!(file.size_original, 4);

    let requests = server.received_requests().await.expect("requests recorded");
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn delete_file_twice_second_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/storage/buckets/media/files/f1a2b3c4"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/storage/buckets/media/files/f1a2b3c4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = connect(&server);
    store.delete_file("f1a2b3c4").await.expect("first delete succeeds");
    let err = store
        .delete_file("f1a2b3c4")
        .await
        .expect_err("second delete should fail");
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn preview_url_is_built_without_a_request() {
    let server = MockServer::start().await;
    let store = connect(&server);

    let url = store.file_preview_url("f1a2b3c4");
    assert_eq!(
        url,
        format!(
            "{}/storage/buckets/media/files/f1a2b3c4/preview?project=blog-test",
            server.uri()
        )
    );

    let requests = server.received_requests().await.expect("requests recorded");
    assert!(requests.is_empty());
}
