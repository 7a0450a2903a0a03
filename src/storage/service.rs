//! Bucket access over the backend's storage routes.

use uuid::Uuid;

use super::types::{FileUpload, StoredFile};
use crate::client::{self, Client};
use crate::error::{StoreError, StoreResult};

/// Access to the media bucket.
///
/// Implemented over HTTP by [`HttpFileStore`]; tests substitute an in-memory
/// implementation.
pub trait FileStore: Send + Sync {
    /// Stores a payload under a freshly generated unique identifier.
    fn upload(
        &self,
        upload: FileUpload,
    ) -> impl std::future::Future<Output = StoreResult<StoredFile>> + Send;

    /// Removes a stored file.
    fn delete(&self, file_id: &str) -> impl std::future::Future<Output = StoreResult<()>> + Send;

    /// Builds the viewing URL for a file.
    ///
    /// Pure string construction: performs no request and does not check that
    /// the identifier exists.
    fn preview_url(&self, file_id: &str) -> String;
}

/// HTTP implementation of [`FileStore`].
#[derive(Debug, Clone)]
pub struct HttpFileStore {
    client: Client,
    bucket_id: String,
}

impl HttpFileStore {
    /// Creates a store bound to one bucket.
    #[must_use]
    pub fn new(client: Client, bucket_id: impl Into<String>) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }

    fn files_url(&self) -> String {
        self.client
            .url(&format!("storage/buckets/{}/files", self.bucket_id))
    }
}

impl FileStore for HttpFileStore {
    async fn upload(&self, upload: FileUpload) -> StoreResult<StoredFile> {
        // The backend expects the caller to supply the unique id.
        let file_id = Uuid::new_v4().simple().to_string();

        let part = reqwest::multipart::Part::bytes(upload.bytes.to_vec())
            .file_name(upload.filename)
            .mime_str(&upload.content_type)
            .map_err(|e| {
                StoreError::configuration(format!(
                    "content type '{}': {e}",
                    upload.content_type
                ))
            })?;
        let form = reqwest::multipart::Form::new()
            .text("fileId", file_id)
            .part("file", part);

        let response = self
            .client
            .http()
            .post(self.files_url())
            .multipart(form)
            .send()
            .await?;
        client::json_body(response, "upload file").await
    }

    async fn delete(&self, file_id: &str) -> StoreResult<()> {
        let response = self
            .client
            .http()
            .delete(format!("{}/{}", self.files_url(), file_id))
            .send()
            .await?;
        client::empty_body(response, "delete file").await
    }

    fn preview_url(&self, file_id: &str) -> String {
        format!(
            "{}/{}/preview?project={}",
            self.files_url(),
            file_id,
            self.client.project_id()
        )
    }
}
