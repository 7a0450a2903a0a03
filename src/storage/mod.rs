//! File storage: bucket types and access.

mod service;
mod types;

pub use service::{FileStore, HttpFileStore};
pub use types::{FileUpload, StoredFile};
