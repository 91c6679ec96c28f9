#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sportsnews_api::config::FeedConfiguration;
use sportsnews_api::model::{Article, Articles, NewArticle};
use sportsnews_api::repository::{ArticleCache, ArticleRepository, CacheError, PersistError};

pub fn feed_configuration(mock_uri: &str) -> FeedConfiguration {
    FeedConfiguration {
        single_url: format!("{mock_uri}/getnewsarticleinformation"),
        list_url: format!("{mock_uri}/getnewlistinformation"),
        count: 50,
        max_workers: 30,
        frequency: Duration::from_secs(1800),
    }
}

pub fn list_body(club_name: &str, club_url: &str, items: &[(&str, &str)]) -> String {
    let items = items
        .iter()
        .map(|(id, title)| {
            format!(
                "<NewsletterNewsItem>\
                 <ArticleURL>{club_url}/news/{id}</ArticleURL>\
                 <NewsArticleID>{id}</NewsArticleID>\
                 <PublishDate>2023-03-15 10:30:00</PublishDate>\
                 <Taxonomies>Club News</Taxonomies>\
                 <TeaserText>Teaser for {id}</TeaserText>\
                 <Title>{title}</Title>\
                 <IsPublished>true</IsPublished>\
                 </NewsletterNewsItem>"
            )
        })
        .collect::<String>();

    format!(
        "<NewListInformation>\
         <ClubName>{club_name}</ClubName>\
         <ClubWebsiteURL>{club_url}</ClubWebsiteURL>\
         <NewsletterNewsItems>{items}</NewsletterNewsItems>\
         </NewListInformation>"
    )
}

pub fn detail_body(id: &str, title: &str, body: &str, subtitle: &str) -> String {
    format!(
        "<NewsArticleInformation>\
         <NewsArticle>\
         <NewsArticleID>{id}</NewsArticleID>\
         <Title>{title}</Title>\
         <BodyText>{body}</BodyText>\
         <Subtitle>{subtitle}</Subtitle>\
         </NewsArticle>\
         </NewsArticleInformation>"
    )
}

pub fn new_article(article_id: &str) -> NewArticle {
    NewArticle {
        article_id: String::from(article_id),
        team_id: String::from("Dummy City"),
        club_url: String::from("https://dummy.example.com"),
        opta_match_id: String::new(),
        title: format!("Title {article_id}"),
        categories: vec![String::from("Club News")],
        teaser: String::from("Teaser"),
        content: String::from("Body"),
        url: format!("https://dummy.example.com/news/{article_id}"),
        image_url: String::new(),
        gallery_urls: Vec::new(),
        video_url: String::new(),
        subtitle: String::from("Subtitle"),
        is_published: true,
        published: DateTime::<Utc>::default(),
    }
}

pub fn article(id: i32, article_id: &str) -> Article {
    let new = new_article(article_id);

    Article {
        id,
        article_id: new.article_id,
        team_id: new.team_id,
        club_url: new.club_url,
        opta_match_id: new.opta_match_id,
        title: new.title,
        categories: new.categories,
        teaser: new.teaser,
        content: new.content,
        url: new.url,
        image_url: new.image_url,
        gallery_urls: new.gallery_urls,
        video_url: new.video_url,
        subtitle: new.subtitle,
        is_published: new.is_published,
        published: new.published,
    }
}

/// In-memory repository honouring the upsert-by-natural-key contract, with
/// an optional list of article ids whose upsert is rejected.
pub struct InMemoryRepository {
    articles: Mutex<HashMap<String, Article>>,
    next_id: AtomicI32,
    fail_for: Vec<String>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::failing_for(&[])
    }

    pub fn failing_for(article_ids: &[&str]) -> Self {
        InMemoryRepository {
            articles: Mutex::new(HashMap::new()),
            next_id: AtomicI32::new(1),
            fail_for: article_ids.iter().map(|id| String::from(*id)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn stored(&self, article_id: &str) -> Option<Article> {
        self.articles.lock().unwrap().get(article_id).cloned()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Article>, PersistError> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Articles, PersistError> {
        let articles: Vec<Article> = self.articles.lock().unwrap().values().cloned().collect();

        Ok(Articles {
            total: articles.len() as i64,
            articles,
        })
    }

    async fn upsert(&self, article: NewArticle) -> Result<Article, PersistError> {
        if self.fail_for.contains(&article.article_id) {
            return Err(PersistError::Unexpected(anyhow::anyhow!(
                "store rejected the upsert"
            )));
        }

        let mut articles = self.articles.lock().unwrap();
        let id = match articles.get(&article.article_id) {
            Some(existing) => existing.id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };

        let stored = Article {
            id,
            article_id: article.article_id,
            team_id: article.team_id,
            club_url: article.club_url,
            opta_match_id: article.opta_match_id,
            title: article.title,
            categories: article.categories,
            teaser: article.teaser,
            content: article.content,
            url: article.url,
            image_url: article.image_url,
            gallery_urls: article.gallery_urls,
            video_url: article.video_url,
            subtitle: article.subtitle,
            is_published: article.is_published,
            published: article.published,
        };
        articles.insert(stored.article_id.clone(), stored.clone());

        Ok(stored)
    }
}

/// In-memory cache, optionally rejecting every write.
pub struct InMemoryCache {
    entries: Mutex<HashMap<i32, Article>>,
    failing: bool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            entries: Mutex::new(HashMap::new()),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        InMemoryCache {
            entries: Mutex::new(HashMap::new()),
            failing: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn entry(&self, id: i32) -> Option<Article> {
        self.entries.lock().unwrap().get(&id).cloned()
    }

    pub fn insert(&self, article: Article) {
        self.entries.lock().unwrap().insert(article.id, article);
    }
}

#[async_trait]
impl ArticleCache for InMemoryCache {
    async fn get(&self, id: i32) -> Result<Option<Article>, CacheError> {
        Ok(self.entries.lock().unwrap().get(&id).cloned())
    }

    async fn set(&self, article: &Article) -> Result<(), CacheError> {
        if self.failing {
            return Err(CacheError::Unexpected(anyhow::anyhow!(
                "cache rejected the write"
            )));
        }

        self.entries
            .lock()
            .unwrap()
            .insert(article.id, article.clone());

        Ok(())
    }
}
