use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::ads::dtos::{AdDetailDto, AdSummaryDto, CreateAdDto};
use crate::features::ads::services::AdService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List active ads, newest first
#[utoipa::path(
    get,
    path = "/api/ads",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of ads", body = ApiResponse<Vec<AdSummaryDto>>),
    ),
    tag = "ads"
)]
pub async fn list_ads(
    State(service): State<Arc<AdService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdSummaryDto>>>> {
    let (ads, total) = service.list_latest(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(ads),
        None,
        Some(Meta { total }),
    )))
}

/// Get an ad by id
#[utoipa::path(
    get,
    path = "/api/ads/{id}",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Ad detail", body = ApiResponse<AdDetailDto>),
        (status = 404, description = "Ad not found")
    ),
    tag = "ads"
)]
pub async fn get_ad(
    State(service): State<Arc<AdService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdDetailDto>>> {
    let ad = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(ad), None, None)))
}

/// Create a new ad
#[utoipa::path(
    post,
    path = "/api/ads",
    request_body = CreateAdDto,
    responses(
        (status = 201, description = "Ad created", body = ApiResponse<AdDetailDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "ads"
)]
pub async fn create_ad(
    user: AuthenticatedUser,
    State(service): State<Arc<AdService>>,
    AppJson(dto): AppJson<CreateAdDto>,
) -> Result<(StatusCode, Json<ApiResponse<AdDetailDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = service.create(user.id, &dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(ad), None, None)),
    ))
}

/// Delete an ad you own
#[utoipa::path(
    delete,
    path = "/api/ads/{id}",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Ad deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Ad not found")
    ),
    security(("bearer_auth" = [])),
    tag = "ads"
)]
pub async fn delete_ad(
    user: AuthenticatedUser,
    State(service): State<Arc<AdService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Ad deleted successfully".to_string()),
        None,
    )))
}
