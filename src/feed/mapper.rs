use chrono::NaiveDateTime;

use crate::feed::NewsItemStub;
use crate::model::NewArticle;

/// Publish dates come from the provider as naive local strings.
const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a provider news item into the canonical article record.
///
/// `body` and `subtitle` come from the detail endpoint and take precedence
/// over the stub's teaser-level fields. An unparseable publish date maps to
/// the zero timestamp, never to an error.
pub fn article_from_item(
    item: NewsItemStub,
    body: &str,
    subtitle: &str,
    club_name: &str,
    club_url: &str,
) -> NewArticle {
    let published = NaiveDateTime::parse_from_str(&item.publish_date, PUBLISH_DATE_FORMAT)
        .map(|date| date.and_utc())
        .unwrap_or_default();

    NewArticle {
        article_id: item.news_article_id,
        team_id: club_name.to_owned(),
        club_url: club_url.to_owned(),
        opta_match_id: item.opta_match_id,
        title: item.title,
        categories: item.taxonomies,
        teaser: item.teaser_text,
        content: body.to_owned(),
        url: item.article_url,
        image_url: item.thumbnail_image_url,
        gallery_urls: item.gallery_image_urls,
        video_url: item.video_url,
        subtitle: subtitle.to_owned(),
        is_published: item.is_published,
        published,
    }
}
