use async_trait::async_trait;
use sqlx::PgPool;

use crate::model::{Article, Articles, NewArticle};
use crate::repository::{ArticleRepository, PersistError};

pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<Article>, PersistError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            SELECT * FROM articles WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Articles, PersistError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM articles
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT * FROM articles ORDER BY published DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(Articles { total, articles })
    }

    #[tracing::instrument(skip(self, article), fields(article_id = %article.article_id))]
    async fn upsert(&self, article: NewArticle) -> Result<Article, PersistError> {
        let stored = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (article_id, team_id, club_url, opta_match_id, title, categories,
                                  teaser, content, url, image_url, gallery_urls, video_url,
                                  subtitle, is_published, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (article_id) DO UPDATE
                SET team_id       = EXCLUDED.team_id,
                    club_url      = EXCLUDED.club_url,
                    opta_match_id = EXCLUDED.opta_match_id,
                    title         = EXCLUDED.title,
                    categories    = EXCLUDED.categories,
                    teaser        = EXCLUDED.teaser,
                    content       = EXCLUDED.content,
                    url           = EXCLUDED.url,
                    image_url     = EXCLUDED.image_url,
                    gallery_urls  = EXCLUDED.gallery_urls,
                    video_url     = EXCLUDED.video_url,
                    subtitle      = EXCLUDED.subtitle,
                    is_published  = EXCLUDED.is_published,
                    published     = EXCLUDED.published
            RETURNING *
            "#,
        )
        .bind(&article.article_id)
        .bind(&article.team_id)
        .bind(&article.club_url)
        .bind(&article.opta_match_id)
        .bind(&article.title)
        .bind(&article.categories)
        .bind(&article.teaser)
        .bind(&article.content)
        .bind(&article.url)
        .bind(&article.image_url)
        .bind(&article.gallery_urls)
        .bind(&article.video_url)
        .bind(&article.subtitle)
        .bind(article.is_published)
        .bind(article.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
