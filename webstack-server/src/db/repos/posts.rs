//! Post repository
//!
//! - list: full scan in insertion order
//! - create: INSERT ... RETURNING, so the caller gets the assigned id

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewPost, Post};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage for posts (testable)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, oldest first.
    async fn list_posts(&self) -> Result<Vec<Post>, DbError>;

    /// Insert one post and return it with its assigned id.
    async fn create_post(&self, post: NewPost) -> Result<Post, DbError>;
}

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content
            FROM posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DbError> {
        let created = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content
            "#,
        )
        .bind(post.title())
        .bind(post.content())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = created.id, "Created post");
        Ok(created)
    }
}
