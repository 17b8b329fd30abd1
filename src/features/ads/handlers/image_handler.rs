use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::ads::dtos::{
    is_image_mime_type_allowed, AdImageDto, DeleteImageResponseDto, UploadImageForm,
    ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_SIZE,
};
use crate::features::ads::services::ImageService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Read the `file` field out of a multipart image upload
pub(crate) async fn read_image_field(
    multipart: &mut Multipart,
) -> Result<(Vec<u8>, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "file" {
            let ct = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read file bytes: {}", e);
                AppError::BadRequest(format!("Failed to read file data: {}", e))
            })?;

            file_data = Some(data.to_vec());
            content_type = Some(ct);
        } else {
            debug!("Ignoring unknown field: {}", field_name);
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    if file_data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    if !is_image_mime_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_IMAGE_MIME_TYPES.join(", ")
        )));
    }

    Ok((file_data, content_type))
}

/// Upload an image for an ad
#[utoipa::path(
    post,
    path = "/api/ads/{id}/images",
    params(
        ("id" = Uuid, Path, description = "Ad ID")
    ),
    request_body(
        content = UploadImageForm,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 201, description = "Image uploaded", body = ApiResponse<AdImageDto>),
        (status = 400, description = "Invalid file"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the ad owner"),
        (status = 404, description = "Ad not found")
    ),
    security(("bearer_auth" = [])),
    tag = "ads"
)]
pub async fn upload_ad_image(
    user: AuthenticatedUser,
    State(service): State<Arc<ImageService>>,
    Path(ad_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<AdImageDto>>), AppError> {
    let (data, content_type) = read_image_field(&mut multipart).await?;

    let image = service.upload(user.id, ad_id, data, &content_type).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(image), None, None)),
    ))
}

/// Delete an ad image
///
/// Removes the record and best-effort deletes the stored file.
#[utoipa::path(
    delete,
    path = "/api/ads/images/{id}",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted", body = ApiResponse<DeleteImageResponseDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Image not found")
    ),
    security(("bearer_auth" = [])),
    tag = "ads"
)]
pub async fn delete_ad_image(
    user: AuthenticatedUser,
    State(service): State<Arc<ImageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteImageResponseDto>>, AppError> {
    service.delete(user.id, id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteImageResponseDto { deleted: true }),
        Some("Image deleted successfully".to_string()),
        None,
    )))
}
