//! Post repository: append-only persistence of submitted posts.
//!
//! Uses SqlitePoolManager and the models (PostRecord, PostRef).
//! External: SQLite via sqlx; callers use append/list_all/count through [`PostStore`].

use crate::error::StorageError;
use crate::models::{PostRecord, PostRef};
use crate::repository::PostStore;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

#[derive(Clone)]
pub struct PostRepository {
    pool_manager: SqlitePoolManager,
}

impl PostRepository {
    /// Opens (creating if needed) the database and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    /// Creates the `posts` table if it does not exist. Safe to call any number of times.
    pub async fn init(&self) -> Result<(), StorageError> {
        info!("Creating posts table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                message_reference INTEGER NOT NULL,
                source_chat_id INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Looks up a single post by its store-assigned id.
    pub async fn get_post_by_id(&self, id: i64) -> Result<Option<PostRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let post = sqlx::query_as::<_, PostRecord>(
            "SELECT id, message_reference, source_chat_id, created_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Most recently added posts, newest first.
    pub async fn recent_posts(&self, limit: i64) -> Result<Vec<PostRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let posts = sqlx::query_as::<_, PostRecord>(
            "SELECT id, message_reference, source_chat_id, created_at FROM posts ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn append(
        &self,
        message_reference: i64,
        source_chat_id: i64,
    ) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            "INSERT INTO posts (message_reference, source_chat_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(message_reference)
        .bind(source_chat_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(
            id = id,
            message_reference = message_reference,
            source_chat_id = source_chat_id,
            "Saved post"
        );
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<PostRef>, StorageError> {
        let pool = self.pool_manager.pool();

        let posts: Vec<PostRef> =
            sqlx::query_as::<_, PostRef>("SELECT message_reference, source_chat_id FROM posts")
                .fetch_all(pool)
                .await?;

        info!("Retrieved {} posts", posts.len());
        Ok(posts)
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await?;

        Ok(total.0)
    }
}
