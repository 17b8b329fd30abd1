use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::articles::handlers;
use crate::features::articles::services::ArticleService;

/// Public read routes for published articles
pub fn public_routes(service: Arc<ArticleService>) -> Router {
    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/{id}", get(handlers::get_article))
        .with_state(service)
}

/// Protected routes: article image management
pub fn protected_routes(service: Arc<ArticleService>) -> Router {
    Router::new()
        .route(
            "/api/articles/images/{id}",
            delete(handlers::delete_article_image),
        )
        .with_state(service)
}
