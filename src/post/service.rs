//! Post repository over the backend's document routes.

use serde_json::json;

use super::query::ListQuery;
use super::types::{CreatePost, Post, PostPage, UpdatePost};
use crate::client::{self, Client};
use crate::error::StoreResult;

/// Access to the post collection.
///
/// Implemented over HTTP by [`HttpPostRepository`]; tests substitute an
/// in-memory implementation.
pub trait PostRepository: Send + Sync {
    /// Fetches one post by slug.
    fn get(&self, slug: &str) -> impl std::future::Future<Output = StoreResult<Post>> + Send;

    /// Lists posts matching the query.
    fn list(
        &self,
        query: &ListQuery,
    ) -> impl std::future::Future<Output = StoreResult<PostPage>> + Send;

    /// Creates a post keyed by its slug.
    fn create(
        &self,
        input: &CreatePost,
    ) -> impl std::future::Future<Output = StoreResult<Post>> + Send;

    /// Overwrites the replaceable fields of the post keyed by slug.
    fn update(
        &self,
        slug: &str,
        input: &UpdatePost,
    ) -> impl std::future::Future<Output = StoreResult<Post>> + Send;

    /// Removes the post keyed by slug.
    fn delete(&self, slug: &str) -> impl std::future::Future<Output = StoreResult<()>> + Send;
}

/// HTTP implementation of [`PostRepository`].
#[derive(Debug, Clone)]
pub struct HttpPostRepository {
    client: Client,
    database_id: String,
    collection_id: String,
}

impl HttpPostRepository {
    /// Creates a repository bound to one database and collection.
    #[must_use]
    pub fn new(
        client: Client,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            collection_id: collection_id.into(),
        }
    }

    fn documents_url(&self) -> String {
        self.client.url(&format!(
            "databases/{}/collections/{}/documents",
            self.database_id, self.collection_id
        ))
    }

    fn document_url(&self, slug: &str) -> String {
        format!("{}/{}", self.documents_url(), slug)
    }
}

impl PostRepository for HttpPostRepository {
    async fn get(&self, slug: &str) -> StoreResult<Post> {
        let response = self.client.http().get(self.document_url(slug)).send().await?;
        client::json_body(response, "fetch post").await
    }

    async fn list(&self, query: &ListQuery) -> StoreResult<PostPage> {
        let params: Vec<(&str, String)> = query
            .encode()
            .into_iter()
            .map(|q| ("queries[]", q))
            .collect();

        let response = self
            .client
            .http()
            .get(self.documents_url())
            .query(&params)
            .send()
            .await?;
        client::json_body(response, "list posts").await
    }

    async fn create(&self, input: &CreatePost) -> StoreResult<Post> {
        // The slug travels as the document key, next to the data payload.
        let body = json!({ "documentId": input.slug, "data": input });
        let response = self
            .client
            .http()
            .post(self.documents_url())
            .json(&body)
            .send()
            .await?;
        client::json_body(response, "create post").await
    }

    async fn update(&self, slug: &str, input: &UpdatePost) -> StoreResult<Post> {
        let body = json!({ "data": input });
        let response = self
            .client
            .http()
            .patch(self.document_url(slug))
            .json(&body)
            .send()
            .await?;
        client::json_body(response, "update post").await
    }

    async fn delete(&self, slug: &str) -> StoreResult<()> {
        let response = self
            .client
            .http()
            .delete(self.document_url(slug))
            .send()
            .await?;
        client::empty_body(response, "delete post").await
    }
}
