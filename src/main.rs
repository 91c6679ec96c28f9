use std::env;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use sportsnews_api::config::{CacheConfiguration, FeedConfiguration};
use sportsnews_api::consumer::FeedConsumer;
use sportsnews_api::feed::FeedClient;
use sportsnews_api::repository::postgres::PgArticleRepository;
use sportsnews_api::repository::redis::RedisArticleCache;
use sportsnews_api::repository::{ArticleCache, ArticleRepository};
use sportsnews_api::services::articles::ArticleService;
use sportsnews_api::{init_postgres_connection, init_redis_connection, observability, startup};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = observability::get_subscriber("info");
    observability::init_subscriber(subscriber);

    let postgres_connection = init_postgres_connection().await;
    sqlx::migrate!("./migrations")
        .run(&postgres_connection)
        .await
        .expect("Could not run database migrations");

    let redis_pool = init_redis_connection();

    let listener =
        TcpListener::bind(env::var("LISTEN_ON").unwrap_or_else(|_| String::from("0.0.0.0:8081")))?;

    let feed_configuration = FeedConfiguration::from_env();
    let cache_configuration = CacheConfiguration::from_env();

    let repository: Arc<dyn ArticleRepository> =
        Arc::new(PgArticleRepository::new(postgres_connection.clone()));
    let cache: Arc<dyn ArticleCache> =
        Arc::new(RedisArticleCache::new(redis_pool, cache_configuration));

    let article_service = ArticleService::new(repository.clone(), cache.clone());

    let client = build_client().expect("Could not build the HTTP client");
    let consumer = FeedConsumer::new(
        FeedClient::new(client, feed_configuration.clone()),
        repository,
        cache,
        feed_configuration.max_workers,
    );

    let sched = JobScheduler::new()
        .await
        .expect("Could not create the scheduler");
    sched
        .add(
            Job::new_repeated_async(feed_configuration.frequency, move |_, _| {
                let consumer = consumer.clone();
                Box::pin(async move {
                    info!("Scheduled feed ingestion in progress");
                    consumer.run().await;
                    info!("Scheduled feed ingestion done");
                })
            })
            .expect("Could not create the ingestion job"),
        )
        .await
        .expect("Could not schedule the ingestion job");
    sched.start().await.expect("Could not start the scheduler");

    startup::startup(article_service, listener).await
}

fn build_client() -> reqwest::Result<Client> {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .user_agent("sportsnews-api fetcher")
        .build()
}
