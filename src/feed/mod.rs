use reqwest::Client;
use serde::Deserialize;

use crate::config::FeedConfiguration;

pub mod mapper;

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("HTTP status code error: provider returned HTTP status code {0}")]
    StatusCodeError(u16),
    #[error("Could not fetch the feed: {0}")]
    GetError(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    DecodeError(#[from] quick_xml::DeError),
}

/// Result of the provider list endpoint: the owning club plus a batch of
/// news item stubs.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct NewsListing {
    #[serde(rename = "ClubName", default)]
    pub club_name: String,
    #[serde(rename = "ClubWebsiteURL", default)]
    pub club_website_url: String,
    #[serde(rename = "NewsletterNewsItems", default)]
    pub items: NewsItems,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct NewsItems {
    #[serde(rename = "NewsletterNewsItem", default)]
    pub items: Vec<NewsItemStub>,
}

/// A single provider news item. The list endpoint returns these with teaser
/// level fields only; the by-id endpoint returns the same shape with the
/// full body text and the definitive subtitle.
///
/// Fields absent from the markup decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewsItemStub {
    #[serde(rename = "ArticleURL", default)]
    pub article_url: String,
    #[serde(rename = "NewsArticleID", default)]
    pub news_article_id: String,
    #[serde(rename = "PublishDate", default)]
    pub publish_date: String,
    #[serde(rename = "Taxonomies", default)]
    pub taxonomies: Vec<String>,
    #[serde(rename = "TeaserText", default)]
    pub teaser_text: String,
    #[serde(rename = "Subtitle", default)]
    pub subtitle: String,
    #[serde(rename = "ThumbnailImageURL", default)]
    pub thumbnail_image_url: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "BodyText", default)]
    pub body_text: String,
    #[serde(rename = "GalleryImageURLs", default)]
    pub gallery_image_urls: Vec<String>,
    #[serde(rename = "VideoURL", default)]
    pub video_url: String,
    #[serde(rename = "OptaMatchId", default)]
    pub opta_match_id: String,
    #[serde(rename = "LastUpdateDate", default)]
    pub last_update_date: String,
    #[serde(rename = "IsPublished", default)]
    pub is_published: bool,
}

/// Result of the provider by-id endpoint.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct NewsItemEnvelope {
    #[serde(rename = "NewsArticle", default)]
    pub news_article: NewsItemStub,
}

/// Client for the two provider endpoints. Every call performs exactly one
/// outbound request and fully consumes the response body before decoding.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    configuration: FeedConfiguration,
}

impl FeedClient {
    pub fn new(client: Client, configuration: FeedConfiguration) -> Self {
        Self {
            client,
            configuration,
        }
    }

    /// Fetch the most recent news items, capped at the configured count.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<NewsListing, FeedError> {
        let response = self
            .client
            .get(&self.configuration.list_url)
            .query(&[("count", self.configuration.count)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::StatusCodeError(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    /// Fetch the full detail of a single news item.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<NewsItemEnvelope, FeedError> {
        let response = self
            .client
            .get(&self.configuration.single_url)
            .query(&[("id", id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::StatusCodeError(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(quick_xml::de::from_str(&body)?)
    }
}
