use std::net::TcpListener;

use actix_web::web::Data;
use actix_web::{web, App, HttpServer};

use crate::routes;
use crate::services::articles::ArticleService;

pub struct AppState {
    pub article_service: ArticleService,
}

pub async fn startup(
    article_service: ArticleService,
    listener: TcpListener,
) -> std::io::Result<()> {
    let state = Data::new(AppState { article_service });

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(state.clone())
            .service(web::scope("/api/v1").configure(routes::configure))
    })
    .listen(listener)?
    .run()
    .await
}
