use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::ads::dtos::{
    AdCategoryRef, AdDetailDto, AdImageDto, AdOwnerRef, AdSummaryDto, CreateAdDto,
};
use crate::features::ads::models::Image;
use crate::modules::storage::{MediaUrlResolver, MinIOClient};
use crate::shared::types::PaginationQuery;

/// Flat row shape for an ad with its category and owner attached
#[derive(Debug, FromRow)]
struct AdRow {
    id: Uuid,
    title: String,
    description: String,
    is_featured: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    category_id: Uuid,
    category_name: String,
    category_slug: String,
    user_id: Uuid,
    user_name: String,
}

const AD_ROW_SELECT: &str = r#"
    SELECT
        a.id,
        a.title,
        a.description,
        a.is_featured,
        a.created_at,
        a.updated_at,
        c.id AS category_id,
        c.name AS category_name,
        c.slug AS category_slug,
        u.id AS user_id,
        u.name AS user_name
    FROM ads a
    JOIN categories c ON c.id = a.category_id
    JOIN users u ON u.id = a.user_id
"#;

/// Service for ad listings
pub struct AdService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
    media: Arc<MediaUrlResolver>,
}

impl AdService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>, media: Arc<MediaUrlResolver>) -> Self {
        Self {
            pool,
            storage,
            media,
        }
    }

    /// List active ads, newest first, paginated.
    /// Returns (ads, total_count); category, owner and images are attached.
    pub async fn list_latest(&self, params: &PaginationQuery) -> Result<(Vec<AdSummaryDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ads WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count ads: {:?}", e);
                AppError::Database(e)
            })?;

        let rows = sqlx::query_as::<_, AdRow>(&format!(
            "{} WHERE a.is_active ORDER BY a.created_at DESC OFFSET $1 LIMIT $2",
            AD_ROW_SELECT
        ))
        .bind(params.offset())
        .bind(params.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list ads: {:?}", e);
            AppError::Database(e)
        })?;

        let mut ads = Vec::with_capacity(rows.len());
        for row in rows {
            let images = self.get_ad_images(row.id).await?;
            ads.push(summary_from_row(row, Some(images)));
        }

        Ok((ads, total))
    }

    /// Featured ads for the home feed (category and owner attached)
    pub async fn featured(&self, limit: i64) -> Result<Vec<AdSummaryDto>> {
        let rows = sqlx::query_as::<_, AdRow>(&format!(
            "{} WHERE a.is_active AND a.is_featured ORDER BY a.created_at DESC LIMIT $1",
            AD_ROW_SELECT
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch featured ads: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|row| summary_from_row(row, None))
            .collect())
    }

    /// Latest ads for the home feed (category, owner and images attached)
    pub async fn latest(&self, limit: i64) -> Result<Vec<AdSummaryDto>> {
        let rows = sqlx::query_as::<_, AdRow>(&format!(
            "{} WHERE a.is_active ORDER BY a.created_at DESC LIMIT $1",
            AD_ROW_SELECT
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch latest ads: {:?}", e);
            AppError::Database(e)
        })?;

        let mut ads = Vec::with_capacity(rows.len());
        for row in rows {
            let images = self.get_ad_images(row.id).await?;
            ads.push(summary_from_row(row, Some(images)));
        }

        Ok(ads)
    }

    /// Get a single ad with images
    pub async fn get(&self, id: Uuid) -> Result<AdDetailDto> {
        let row = sqlx::query_as::<_, AdRow>(&format!("{} WHERE a.id = $1", AD_ROW_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch ad {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Ad not found".to_string()))?;

        let images = self.get_ad_images(row.id).await?;

        Ok(detail_from_row(row, images))
    }

    /// Create a new ad owned by `user_id`
    pub async fn create(&self, user_id: Uuid, dto: &CreateAdDto) -> Result<AdDetailDto> {
        let category_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1 AND is_active)",
        )
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !category_exists {
            return Err(AppError::BadRequest("Unknown category".to_string()));
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO ads (user_id, category_id, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(dto.category_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ad: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Ad created: id={}, user={}", id, user_id);

        self.get(id).await
    }

    /// Delete an ad you own. Image rows cascade in the database; their stored
    /// files are removed best-effort afterwards.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let owner = sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Ad not found".to_string()))?;

        if owner != user_id {
            return Err(AppError::Forbidden(
                "You do not own this ad".to_string(),
            ));
        }

        let paths = sqlx::query_scalar::<_, Option<String>>(
            "SELECT path FROM images WHERE ad_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!("Ad deleted: id={}, user={}", id, user_id);

        // Row deletion already succeeded; storage failures are logged only.
        for path in paths.into_iter().flatten() {
            if let Err(e) = self.storage.delete(&path).await {
                tracing::warn!("Failed to delete stored file '{}': {}", path, e);
            }
        }

        Ok(())
    }

    /// Images for an ad, ordered, with derived URLs
    async fn get_ad_images(&self, ad_id: Uuid) -> Result<Vec<AdImageDto>> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, ad_id, path, display_order, is_primary, created_at
            FROM images
            WHERE ad_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(ad_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch images for ad {}: {:?}", ad_id, e);
            AppError::Database(e)
        })?;

        Ok(images
            .into_iter()
            .map(|img| AdImageDto {
                id: img.id,
                url: self.media.ad_image_url(img.path.as_deref()),
                display_order: img.display_order,
                is_primary: img.is_primary,
            })
            .collect())
    }
}

fn summary_from_row(row: AdRow, images: Option<Vec<AdImageDto>>) -> AdSummaryDto {
    AdSummaryDto {
        id: row.id,
        title: row.title,
        description: row.description,
        is_featured: row.is_featured,
        created_at: row.created_at,
        category: AdCategoryRef {
            id: row.category_id,
            name: row.category_name,
            slug: row.category_slug,
        },
        user: AdOwnerRef {
            id: row.user_id,
            name: row.user_name,
        },
        images,
    }
}

fn detail_from_row(row: AdRow, images: Vec<AdImageDto>) -> AdDetailDto {
    AdDetailDto {
        id: row.id,
        title: row.title,
        description: row.description,
        is_featured: row.is_featured,
        created_at: row.created_at,
        updated_at: row.updated_at,
        category: AdCategoryRef {
            id: row.category_id,
            name: row.category_name,
            slug: row.category_slug,
        },
        user: AdOwnerRef {
            id: row.user_id,
            name: row.user_name,
        },
        images,
    }
}
