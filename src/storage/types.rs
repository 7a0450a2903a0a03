//! Stored file types.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Metadata of a file stored in the bucket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Service-assigned file identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Original filename.
    pub name: String,
    /// MIME type recorded at upload.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size_original: u64,
    /// Server-side creation time.
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A binary payload to store in the bucket.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Filename reported to the bucket.
    pub filename: String,
    /// MIME type of the payload.
    pub content_type: String,
    /// File contents.
    pub bytes: Bytes,
}

impl FileUpload {
    /// Creates an upload from a payload.
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}
