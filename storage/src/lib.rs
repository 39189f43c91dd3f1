//! Storage crate: append-only post persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – PostRecord, PostRef
//! - [`repository`] – PostStore trait
//! - [`post_repo`] – PostRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod post_repo;
mod repository;
mod sqlite_pool;


pub use error::StorageError;
pub use models::{PostRecord, PostRef};
pub use post_repo::PostRepository;
pub use repository::PostStore;
pub use sqlite_pool::SqlitePoolManager;
