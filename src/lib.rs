//! Typed data-access client for the blog's hosted backend.
//!
//! The backend is an Appwrite-style service exposing a document database
//! (post documents, keyed by slug) and an object-storage bucket (uploaded
//! media) over a JSON/REST API. This crate translates high-level blog
//! operations into remote calls:
//!
//! - [`BlogStore`] - the façade: post CRUD plus file upload/delete/preview
//! - [`post`] - document types, list queries, and the collection accessor
//! - [`storage`] - bucket types and the file accessor
//! - [`client`] - the shared connection handle
//!
//! One [`Client`] is constructed from [`StoreConfig`] at process start and
//! shared by every accessor; there is no global state. All fallible
//! operations return [`StoreResult`] with a tagged [`StoreError`], so callers
//! can branch on cause (not found, conflict, auth, transport) or collapse
//! everything into a generic message.

pub mod client;
pub mod config;
pub mod error;
pub mod post;
pub mod storage;
pub mod store;

pub use client::Client;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{BlogStore, HttpBlogStore};
