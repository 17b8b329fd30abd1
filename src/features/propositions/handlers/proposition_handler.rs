use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::propositions::dtos::{CreatePropositionDto, PropositionDto};
use crate::features::propositions::services::PropositionService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List propositions you are involved in, as proposer or ad owner
#[utoipa::path(
    get,
    path = "/api/propositions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of propositions", body = ApiResponse<Vec<PropositionDto>>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "propositions"
)]
pub async fn list_propositions(
    user: AuthenticatedUser,
    State(service): State<Arc<PropositionService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<PropositionDto>>>> {
    let (propositions, total) = service.list_involving(user.id, &params).await?;
    Ok(Json(ApiResponse::success(
        Some(propositions),
        None,
        Some(Meta { total }),
    )))
}

/// Make a proposition on another user's ad
#[utoipa::path(
    post,
    path = "/api/propositions",
    request_body = CreatePropositionDto,
    responses(
        (status = 201, description = "Proposition created", body = ApiResponse<PropositionDto>),
        (status = 400, description = "Own ad or validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Ad not found")
    ),
    security(("bearer_auth" = [])),
    tag = "propositions"
)]
pub async fn create_proposition(
    user: AuthenticatedUser,
    State(service): State<Arc<PropositionService>>,
    AppJson(dto): AppJson<CreatePropositionDto>,
) -> Result<(StatusCode, Json<ApiResponse<PropositionDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let proposition = service.create(user.id, &dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(proposition), None, None)),
    ))
}
