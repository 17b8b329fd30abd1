use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::articles::dtos::{ArticleDetailDto, ArticleSummaryDto};
use crate::features::articles::services::ArticleService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List published articles, newest first
#[utoipa::path(
    get,
    path = "/api/articles",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of published articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(service): State<Arc<ArticleService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ArticleSummaryDto>>>> {
    let (articles, total) = service.list_published(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(articles),
        None,
        Some(Meta { total }),
    )))
}

/// Get a published article by id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(
        ("id" = Uuid, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article detail", body = ApiResponse<ArticleDetailDto>),
        (status = 404, description = "Article not found or not published")
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArticleDetailDto>>> {
    let article = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None, None)))
}

/// Delete an image from an article you authored
#[utoipa::path(
    delete,
    path = "/api/articles/images/{id}",
    params(
        ("id" = Uuid, Path, description = "Article image ID")
    ),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Image not found")
    ),
    security(("bearer_auth" = [])),
    tag = "articles"
)]
pub async fn delete_article_image(
    user: AuthenticatedUser,
    State(service): State<Arc<ArticleService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_image(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Image deleted successfully".to_string()),
        None,
    )))
}
