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
use crate::features::auth::model::AuthenticatedUser;
use crate::features::messaging::dtos::{MessageSummaryDto, SendMessageDto};
use crate::features::messaging::services::MessageService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List your messages, sent and received, newest first
#[utoipa::path(
    get,
    path = "/api/messages",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of messages", body = ApiResponse<Vec<MessageSummaryDto>>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "messages"
)]
pub async fn list_messages(
    user: AuthenticatedUser,
    State(service): State<Arc<MessageService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MessageSummaryDto>>>> {
    let (messages, total) = service.list_for_user(user.id, &params).await?;
    Ok(Json(ApiResponse::success(
        Some(messages),
        None,
        Some(Meta { total }),
    )))
}

/// Send a message to another user
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<MessageSummaryDto>),
        (status = 400, description = "Self-addressed or validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Recipient not found")
    ),
    security(("bearer_auth" = [])),
    tag = "messages"
)]
pub async fn send_message(
    user: AuthenticatedUser,
    State(service): State<Arc<MessageService>>,
    AppJson(dto): AppJson<SendMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<MessageSummaryDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.send(user.id, &dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(message), None, None)),
    ))
}

/// Mark a message you received as read
#[utoipa::path(
    patch,
    path = "/api/messages/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read"),
        (status = 403, description = "Not the recipient"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = [])),
    tag = "messages"
)]
pub async fn mark_message_read(
    user: AuthenticatedUser,
    State(service): State<Arc<MessageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.mark_read(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Message marked as read".to_string()),
        None,
    )))
}
