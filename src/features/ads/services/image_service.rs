use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::ads::dtos::{extension_for_content_type, AdImageDto};
use crate::modules::storage::{MediaUrlResolver, MinIOClient};

#[derive(Debug, FromRow)]
struct ImageWithOwner {
    path: Option<String>,
    ad_owner_id: Uuid,
}

/// Service for ad image uploads and deletion.
///
/// Record deletion and file deletion are attempted together but are not
/// transactional: the row delete is authoritative and storage failures are
/// only logged.
pub struct ImageService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
    media: Arc<MediaUrlResolver>,
}

impl ImageService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>, media: Arc<MediaUrlResolver>) -> Self {
        Self {
            pool,
            storage,
            media,
        }
    }

    /// Upload an image for an ad owned by `user_id`
    pub async fn upload(
        &self,
        user_id: Uuid,
        ad_id: Uuid,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<AdImageDto> {
        let owner = sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM ads WHERE id = $1")
            .bind(ad_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Ad not found".to_string()))?;

        if owner != user_id {
            return Err(AppError::Forbidden("You do not own this ad".to_string()));
        }

        let extension = extension_for_content_type(content_type).unwrap_or("bin");
        let path = format!("ads/{}/{}.{}", ad_id, Uuid::new_v4(), extension);

        self.storage.upload(&path, data, content_type).await?;
        debug!("Ad image uploaded to storage: {}", path);

        let image = sqlx::query_as::<_, crate::features::ads::models::Image>(
            r#"
            INSERT INTO images (ad_id, path, display_order, is_primary)
            VALUES (
                $1,
                $2,
                COALESCE((SELECT MAX(display_order) + 1 FROM images WHERE ad_id = $1), 0),
                NOT EXISTS (SELECT 1 FROM images WHERE ad_id = $1)
            )
            RETURNING id, ad_id, path, display_order, is_primary, created_at
            "#,
        )
        .bind(ad_id)
        .bind(&path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save image record: {:?}", e);
            AppError::Database(e)
        })?;

        info!("Ad image saved: id={}, ad={}, path={}", image.id, ad_id, path);

        Ok(AdImageDto {
            id: image.id,
            url: self.media.ad_image_url(image.path.as_deref()),
            display_order: image.display_order,
            is_primary: image.is_primary,
        })
    }

    /// Delete an ad image record and its stored file.
    ///
    /// The storage delete is attempted even when `path` is NULL; the backend
    /// treats a delete of the empty key as a no-op. Failures do not fail the
    /// request once the row is gone.
    pub async fn delete(&self, user_id: Uuid, image_id: Uuid) -> Result<()> {
        let image = sqlx::query_as::<_, ImageWithOwner>(
            r#"
            SELECT i.path, a.user_id AS ad_owner_id
            FROM images i
            JOIN ads a ON a.id = i.ad_id
            WHERE i.id = $1
            "#,
        )
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        if image.ad_owner_id != user_id {
            return Err(AppError::Forbidden(
                "You do not own this image".to_string(),
            ));
        }

        sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(image_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Ad image deleted: id={}", image_id);

        let path = image.path.unwrap_or_default();
        if let Err(e) = self.storage.delete(&path).await {
            warn!("Failed to delete stored file '{}': {}", path, e);
        }

        Ok(())
    }
}
