use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::PostRef;

/// Append-only post store. There is no update or delete.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Inserts a post and returns its id.
    async fn append(&self, message_reference: i64, source_chat_id: i64)
        -> Result<i64, StorageError>;
    /// Every stored post, in no particular order. Empty when nothing has been stored.
    async fn list_all(&self) -> Result<Vec<PostRef>, StorageError>;
    /// Number of stored posts.
    async fn count(&self) -> Result<i64, StorageError>;
}
