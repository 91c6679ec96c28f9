use std::sync::Arc;

use futures::StreamExt;

use crate::feed::mapper::article_from_item;
use crate::feed::{FeedClient, NewsItemStub};
use crate::repository::{ArticleCache, ArticleRepository};

/// Pulls the provider feed and fans the per-item work out over a bounded
/// pool of concurrent workers: detail fetch, mapping, upsert, then cache
/// population.
#[derive(Clone)]
pub struct FeedConsumer {
    client: FeedClient,
    repository: Arc<dyn ArticleRepository>,
    cache: Arc<dyn ArticleCache>,
    max_workers: usize,
}

impl FeedConsumer {
    pub fn new(
        client: FeedClient,
        repository: Arc<dyn ArticleRepository>,
        cache: Arc<dyn ArticleCache>,
        max_workers: usize,
    ) -> Self {
        Self {
            client,
            repository,
            cache,
            max_workers,
        }
    }

    /// Run one ingestion pass.
    ///
    /// A failed listing aborts the run; per-item failures are logged and
    /// skipped. The caller never sees an error: runs are safe to repeat on
    /// the next tick because persistence is upsert-idempotent.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) {
        let listing = match self.client.list().await {
            Ok(listing) => listing,
            Err(error) => {
                tracing::error!("Could not fetch the feed listing: {error}");
                return;
            }
        };

        let items = listing.items.items;
        if items.is_empty() {
            return;
        }

        let workers = worker_count(self.max_workers, items.len());
        tracing::debug!("Processing {} items with {} workers", items.len(), workers);

        let club_name = listing.club_name;
        let club_url = listing.club_website_url;

        futures::stream::iter(items)
            .for_each_concurrent(workers, |item| {
                let club_name = club_name.clone();
                let club_url = club_url.clone();
                async move {
                    self.process_item(item, &club_name, &club_url).await;
                }
            })
            .await;
    }

    #[tracing::instrument(skip_all, fields(article_id = %item.news_article_id))]
    async fn process_item(&self, item: NewsItemStub, club_name: &str, club_url: &str) {
        let detail = match self.client.get_by_id(&item.news_article_id).await {
            Ok(envelope) => envelope.news_article,
            Err(error) => {
                tracing::warn!("Could not fetch the article detail: {error}");
                return;
            }
        };

        let article = article_from_item(
            item,
            &detail.body_text,
            &detail.subtitle,
            club_name,
            club_url,
        );

        let stored = match self.repository.upsert(article).await {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!("Could not upsert the article: {error}");
                return;
            }
        };

        if let Err(error) = self.cache.set(&stored).await {
            tracing::warn!("Could not cache article {}: {error}", stored.id);
        }
    }
}

/// Number of workers for a run: the configured upper bound, capped by the
/// number of items to process.
fn worker_count(max_workers: usize, items: usize) -> usize {
    max_workers.min(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_is_capped_by_the_number_of_items() {
        assert_eq!(worker_count(30, 3), 3);
    }

    #[test]
    fn worker_count_is_capped_by_the_configured_bound() {
        assert_eq!(worker_count(30, 50), 30);
    }

    #[test]
    fn worker_count_matches_when_bound_and_items_agree() {
        assert_eq!(worker_count(5, 5), 5);
    }
}
