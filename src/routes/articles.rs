use actix_web::{get, web, HttpResponse};

use crate::model::{ArticleResponse, ArticlesResponse};
use crate::routes::ApiError;
use crate::startup::AppState;

#[get("/articles")]
#[tracing::instrument(skip(app_state))]
pub async fn list_articles(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let articles = app_state.article_service.list_articles().await?;

    Ok(HttpResponse::Ok().json(ArticlesResponse::from(articles)))
}

#[get("/articles/{id}")]
#[tracing::instrument(skip(app_state))]
pub async fn get_article(
    id: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let article = app_state.article_service.get_article(id).await?;

    match article {
        Some(article) => Ok(HttpResponse::Ok().json(ArticleResponse::from(article))),
        None => Err(ApiError::NotFound(id)),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_articles).service(get_article);
}
