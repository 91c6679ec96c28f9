use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, ResponseError};
use serde_json::json;

use crate::services::ServiceError;

pub mod articles;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Article {0} not found")]
    NotFound(i32),
    #[error("{0}")]
    ServiceError(#[from] ServiceError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(id) => HttpResponse::NotFound().json(json!({
                "type": "/problem/not-found",
                "title": "Article not found",
                "status": 404,
                "detail": format!("Article with id {} was not found", id)
            })),
            ApiError::ServiceError(_) => HttpResponse::InternalServerError().json(json!({
                "type": "/problem/database",
                "title": "Error with the database",
                "status": 500,
                "detail": "Unexpected error with the database"
            })),
            _ => HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).finish(),
        }
    }
}

#[get("/ping")]
#[tracing::instrument]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("pong")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).configure(articles::configure);
}
