use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::articles::dtos::{
    format_publish_date, ArticleAuthorRef, ArticleDetailDto, ArticleImageDto, ArticleSummaryDto,
};
use crate::features::articles::models::ArticleImage;
use crate::modules::storage::{MediaUrlResolver, MinIOClient};
use crate::shared::types::PaginationQuery;

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    body: String,
    published_at: chrono::DateTime<chrono::Utc>,
    user_id: Uuid,
    user_name: String,
}

#[derive(Debug, FromRow)]
struct ArticleImageWithAuthor {
    path: Option<String>,
    author_id: Uuid,
}

// Only rows past the publish gate are ever selected here.
const PUBLISHED_WHERE: &str =
    "a.is_published AND a.published_at IS NOT NULL AND a.published_at <= NOW()";

/// Service for published articles and their images
pub struct ArticleService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
    media: Arc<MediaUrlResolver>,
}

impl ArticleService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>, media: Arc<MediaUrlResolver>) -> Self {
        Self {
            pool,
            storage,
            media,
        }
    }

    /// List published articles, newest first, paginated
    pub async fn list_published(
        &self,
        params: &PaginationQuery,
    ) -> Result<(Vec<ArticleSummaryDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM articles a WHERE {}",
            PUBLISHED_WHERE
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count articles: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            r#"
            SELECT a.id, a.title, a.body, a.published_at, u.id AS user_id, u.name AS user_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE {}
            ORDER BY a.published_at DESC
            OFFSET $1 LIMIT $2
            "#,
            PUBLISHED_WHERE
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(params.offset())
            .bind(params.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list articles: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((rows.into_iter().map(summary_from_row).collect(), total))
    }

    /// Most recent published articles for the home feed
    pub async fn latest_published(&self, limit: i64) -> Result<Vec<ArticleSummaryDto>> {
        let sql = format!(
            r#"
            SELECT a.id, a.title, a.body, a.published_at, u.id AS user_id, u.name AS user_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE {}
            ORDER BY a.published_at DESC
            LIMIT $1
            "#,
            PUBLISHED_WHERE
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch latest articles: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    /// Get a published article with its images
    pub async fn get(&self, id: Uuid) -> Result<ArticleDetailDto> {
        let sql = format!(
            r#"
            SELECT a.id, a.title, a.body, a.published_at, u.id AS user_id, u.name AS user_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE a.id = $1 AND {}
            "#,
            PUBLISHED_WHERE
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch article {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

        let images = self.get_article_images(row.id).await?;

        Ok(ArticleDetailDto {
            id: row.id,
            title: row.title,
            body: row.body,
            published_at: row.published_at,
            formatted_date: format_publish_date(row.published_at),
            user: ArticleAuthorRef {
                id: row.user_id,
                name: row.user_name,
            },
            images,
        })
    }

    /// Delete an article image record and, when a file is stored, the file.
    ///
    /// Unlike ad images, the storage delete is skipped entirely for rows
    /// without a path. Storage failures are logged and swallowed.
    pub async fn delete_image(&self, user_id: Uuid, image_id: Uuid) -> Result<()> {
        let image = sqlx::query_as::<_, ArticleImageWithAuthor>(
            r#"
            SELECT ai.path, a.user_id AS author_id
            FROM article_images ai
            JOIN articles a ON a.id = ai.article_id
            WHERE ai.id = $1
            "#,
        )
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        if image.author_id != user_id {
            return Err(AppError::Forbidden(
                "You do not own this image".to_string(),
            ));
        }

        sqlx::query("DELETE FROM article_images WHERE id = $1")
            .bind(image_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Article image deleted: id={}", image_id);

        if let Some(path) = image.path.filter(|p| !p.is_empty()) {
            if let Err(e) = self.storage.delete(&path).await {
                warn!("Failed to delete stored file '{}': {}", path, e);
            }
        }

        Ok(())
    }

    async fn get_article_images(&self, article_id: Uuid) -> Result<Vec<ArticleImageDto>> {
        let images = sqlx::query_as::<_, ArticleImage>(
            r#"
            SELECT id, article_id, path, title, description, display_order, is_primary, created_at
            FROM article_images
            WHERE article_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch images for article {}: {:?}", article_id, e);
            AppError::Database(e)
        })?;

        Ok(images
            .into_iter()
            .map(|img| ArticleImageDto {
                id: img.id,
                url: self.media.article_image_url(img.path.as_deref()),
                title: img.title,
                description: img.description,
                display_order: img.display_order,
                is_primary: img.is_primary,
            })
            .collect())
    }
}

fn summary_from_row(row: ArticleRow) -> ArticleSummaryDto {
    ArticleSummaryDto {
        id: row.id,
        title: row.title,
        published_at: row.published_at,
        formatted_date: format_publish_date(row.published_at),
        user: ArticleAuthorRef {
            id: row.user_id,
            name: row.user_name,
        },
    }
}
