use std::sync::Arc;

use crate::model::{Article, Articles};
use crate::repository::{ArticleCache, ArticleRepository};
use crate::services::ServiceError;

/// Read side of the article store: list everything, or fetch one article
/// by internal id through the cache.
#[derive(Clone)]
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    cache: Arc<dyn ArticleCache>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>, cache: Arc<dyn ArticleCache>) -> Self {
        Self { repository, cache }
    }

    /// Cache-aside read: a cache failure counts as a miss, and a record
    /// found in the store is pushed back to the cache best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn get_article(&self, id: i32) -> Result<Option<Article>, ServiceError> {
        match self.cache.get(id).await {
            Ok(Some(article)) => return Ok(Some(article)),
            Ok(None) => (),
            Err(error) => {
                tracing::warn!("Could not read article {id} from the cache: {error}")
            }
        }

        let article = self.repository.get_by_id(id).await?;

        if let Some(article) = &article {
            if let Err(error) = self.cache.set(article).await {
                tracing::warn!("Could not cache article {id}: {error}");
            }
        }

        Ok(article)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_articles(&self) -> Result<Articles, ServiceError> {
        Ok(self.repository.list().await?)
    }
}
