use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::home::dtos::HomeFeedDto;
use crate::features::home::services::HomeService;
use crate::shared::types::ApiResponse;

/// Landing page feed: categories, featured ads, latest ads, recent articles
#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Home feed", body = ApiResponse<HomeFeedDto>),
    ),
    tag = "home"
)]
pub async fn get_home_feed(
    State(service): State<Arc<HomeService>>,
) -> Result<Json<ApiResponse<HomeFeedDto>>> {
    let feed = service.feed().await?;
    Ok(Json(ApiResponse::success(Some(feed), None, None)))
}
