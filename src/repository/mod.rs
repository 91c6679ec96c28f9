use async_trait::async_trait;

use crate::model::{Article, Articles, NewArticle};

pub mod postgres;
pub mod redis;

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("Database error: {0}")]
    SqlError(#[from] sqlx::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] ::redis::RedisError),
    #[error("Redis pool error: {0}")]
    PoolError(#[from] deadpool_redis::PoolError),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Persistent store for articles.
///
/// `upsert` is keyed by the provider article id: writing an already known
/// id replaces the stored fields in place and keeps the internal id.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<Article>, PersistError>;

    async fn list(&self) -> Result<Articles, PersistError>;

    /// Replace-or-insert by natural key, returning the post-write record
    /// with its store-assigned internal id.
    async fn upsert(&self, article: NewArticle) -> Result<Article, PersistError>;
}

/// Time-bounded mirror of stored articles, keyed by internal id. Never the
/// source of truth: populated only after a successful durable write.
#[async_trait]
pub trait ArticleCache: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<Article>, CacheError>;

    async fn set(&self, article: &Article) -> Result<(), CacheError>;
}
