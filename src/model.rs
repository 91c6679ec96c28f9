use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A news article as persisted and served by the API.
///
/// `article_id` is the provider-assigned identifier and the natural key of
/// the record: upserting an article with an already known `article_id`
/// replaces the stored fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    #[serde(rename = "articleID")]
    pub article_id: String,
    pub team_id: String,
    pub club_url: String,
    pub opta_match_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub categories: Vec<String>,
    pub teaser: String,
    pub content: String,
    pub url: String,
    pub image_url: String,
    pub gallery_urls: Vec<String>,
    pub video_url: String,
    pub subtitle: String,
    pub is_published: bool,
    pub published: DateTime<Utc>,
}

/// An article to be inserted, before the store has assigned an internal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub article_id: String,
    pub team_id: String,
    pub club_url: String,
    pub opta_match_id: String,
    pub title: String,
    pub categories: Vec<String>,
    pub teaser: String,
    pub content: String,
    pub url: String,
    pub image_url: String,
    pub gallery_urls: Vec<String>,
    pub video_url: String,
    pub subtitle: String,
    pub is_published: bool,
    pub published: DateTime<Utc>,
}

/// A full listing of stored articles with the total count.
#[derive(Debug, Serialize)]
pub struct Articles {
    pub total: i64,
    pub articles: Vec<Article>,
}

/// REST envelope for a single article.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub status: &'static str,
    pub data: Article,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        ArticleResponse {
            status: "success",
            data: article,
        }
    }
}

/// REST envelope for a list of articles.
#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub status: &'static str,
    pub data: Vec<Article>,
    pub metadata: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub total: i64,
}

impl From<Articles> for ArticlesResponse {
    fn from(articles: Articles) -> Self {
        ArticlesResponse {
            status: "success",
            data: articles.articles,
            metadata: Metadata {
                total: articles.total,
            },
        }
    }
}
