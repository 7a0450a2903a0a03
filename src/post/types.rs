//! Post document types.
//!
//! Wire names follow the backend's document schema: system fields are
//! `$`-prefixed, attributes are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible on the blog.
    #[default]
    Active,
    /// Hidden from the default listing.
    Inactive,
}

impl PostStatus {
    /// The wire string for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parse a wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// A post document as stored in the remote collection.
///
/// The slug doubles as the document key, so it is unique per collection;
/// uniqueness is enforced by the remote service, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document key; the post slug.
    #[serde(rename = "$id")]
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Post body; potentially large rich text.
    pub content: String,
    /// Identifier of the stored file used as cover image, if any.
    /// Never validated locally against the bucket.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Publication status.
    pub status: PostStatus,
    /// Owning user.
    pub user_id: String,
    /// Server-side creation time.
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-side last update time.
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating a post.
///
/// The slug becomes the document key and is sent alongside the data payload,
/// not inside it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    /// Document key for the new post.
    #[serde(skip)]
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Cover image file identifier, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Publication status.
    pub status: PostStatus,
    /// Owning user.
    pub user_id: String,
}

/// Replacement values for an existing post.
///
/// Exactly these fields are overwritten; `user_id` is never touched by an
/// update. `featured_image` is always serialized so that `None` clears the
/// cover image rather than leaving it unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
    /// New cover image file identifier; `None` removes it.
    pub featured_image: Option<String>,
    /// New publication status.
    pub status: PostStatus,
}

/// One page of list results.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
    /// Total matching documents across all pages.
    pub total: u64,
    /// Documents in this page.
    #[serde(rename = "documents")]
    pub posts: Vec<Post>,
}
