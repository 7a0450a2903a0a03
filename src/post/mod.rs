//! Post documents: record types, list queries, and collection access.

mod query;
mod service;
mod types;

pub use query::{DEFAULT_PAGE_SIZE, Filter, ListQuery};
pub use service::{HttpPostRepository, PostRepository};
pub use types::{CreatePost, Post, PostPage, PostStatus, UpdatePost};
