//! The blog store façade.

use tracing::warn;

use crate::client::Client;
use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::post::{
    CreatePost, HttpPostRepository, ListQuery, Post, PostPage, PostRepository, UpdatePost,
};
use crate::storage::{FileStore, FileUpload, HttpFileStore, StoredFile};

/// The store wired to the HTTP backend.
pub type HttpBlogStore = BlogStore<HttpPostRepository, HttpFileStore>;

/// Data access for the blog: post documents plus the media bucket.
///
/// Holds both accessors, derived from one shared [`Client`] by
/// [`HttpBlogStore::connect`]. Construct it once at process start and hand it
/// to consumers; every operation is an independent asynchronous unit of work
/// with no ordering guarantee relative to other in-flight calls. Concurrent
/// writes to the same slug race at the remote service.
///
/// Failures are logged here with an operation label before propagating, so
/// the generic-error UI keeps its diagnostics while callers that care can
/// branch on the [`StoreError`](crate::StoreError) variant.
pub struct BlogStore<P: PostRepository, F: FileStore> {
    posts: P,
    files: F,
}

impl HttpBlogStore {
    /// Connects to the backend described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared client cannot be built from the
    /// configuration. No request is made; a bad endpoint surfaces on the
    /// first operation.
    pub fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::new(config)?;
        Ok(Self {
            posts: HttpPostRepository::new(
                client.clone(),
                &config.database_id,
                &config.collection_id,
            ),
            files: HttpFileStore::new(client, &config.bucket_id),
        })
    }
}

impl<P: PostRepository, F: FileStore> BlogStore<P, F> {
    /// Builds a store from explicit accessors.
    #[must_use]
    pub fn new(posts: P, files: F) -> Self {
        Self { posts, files }
    }

    /// Fetches one post by slug.
    pub async fn get_post(&self, slug: &str) -> StoreResult<Post> {
        self.posts
            .get(slug)
            .await
            .inspect_err(|e| warn!(slug, error = %e, "get_post failed"))
    }

    /// Lists posts matching the query.
    pub async fn get_posts(&self, query: &ListQuery) -> StoreResult<PostPage> {
        self.posts
            .list(query)
            .await
            .inspect_err(|e| warn!(error = %e, "get_posts failed"))
    }

    /// Lists published posts, first page.
    pub async fn get_active_posts(&self) -> StoreResult<PostPage> {
        self.get_posts(&ListQuery::default()).await
    }

    /// Creates a post keyed by its slug.
    ///
    /// Fails with a conflict if a post with that slug already exists; the
    /// existing document is left untouched.
    pub async fn create_post(&self, input: &CreatePost) -> StoreResult<Post> {
        self.posts
            .create(input)
            .await
            .inspect_err(|e| warn!(slug = %input.slug, error = %e, "create_post failed"))
    }

    /// Overwrites the replaceable fields of an existing post.
    ///
    /// Fails with not-found if no post has that slug.
    pub async fn update_post(&self, slug: &str, input: &UpdatePost) -> StoreResult<Post> {
        self.posts
            .update(slug, input)
            .await
            .inspect_err(|e| warn!(slug, error = %e, "update_post failed"))
    }

    /// Removes the post keyed by slug.
    pub async fn delete_post(&self, slug: &str) -> StoreResult<()> {
        self.posts
            .delete(slug)
            .await
            .inspect_err(|e| warn!(slug, error = %e, "delete_post failed"))
    }

    /// Stores a file under a freshly generated unique identifier.
    pub async fn upload_file(&self, upload: FileUpload) -> StoreResult<StoredFile> {
        self.files
            .upload(upload)
            .await
            .inspect_err(|e| warn!(error = %e, "upload_file failed"))
    }

    /// Removes a stored file.
    pub async fn delete_file(&self, file_id: &str) -> StoreResult<()> {
        self.files
            .delete(file_id)
            .await
            .inspect_err(|e| warn!(file_id, error = %e, "delete_file failed"))
    }

    /// Viewing URL for a stored file.
    ///
    /// Synchronous: pure string construction, no request, no check that the
    /// identifier exists.
    #[must_use]
    pub fn file_preview_url(&self, file_id: &str) -> String {
        self.files.preview_url(file_id)
    }
}
