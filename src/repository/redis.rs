use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::{AsyncCommands, SetExpiry, SetOptions};

use crate::config::CacheConfiguration;
use crate::model::Article;
use crate::repository::{ArticleCache, CacheError};

/// Article cache backed by Redis: JSON payloads under
/// `{key_prefix}:{internal id}` with a store-level TTL.
pub struct RedisArticleCache {
    pool: Pool,
    configuration: CacheConfiguration,
}

impl RedisArticleCache {
    pub fn new(pool: Pool, configuration: CacheConfiguration) -> Self {
        Self {
            pool,
            configuration,
        }
    }

    fn key(&self, id: i32) -> String {
        format!("{}:{}", self.configuration.key_prefix, id)
    }
}

#[async_trait]
impl ArticleCache for RedisArticleCache {
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<Option<Article>, CacheError> {
        let mut connection = self.pool.get().await?;
        let payload: Option<String> = connection.get(self.key(id)).await?;

        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip_all, fields(id = article.id))]
    async fn set(&self, article: &Article) -> Result<(), CacheError> {
        let payload = serde_json::to_string(article)?;

        let options = SetOptions::default()
            .with_expiration(SetExpiry::EX(self.configuration.expiration_seconds));

        let mut connection = self.pool.get().await?;
        connection
            .set_options::<_, _, ()>(self.key(article.id), payload, options)
            .await?;

        Ok(())
    }
}
