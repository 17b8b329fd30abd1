use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryWithCountDto;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active categories with their ad counts
    pub async fn list_with_counts(&self) -> Result<Vec<CategoryWithCountDto>> {
        let categories = sqlx::query_as::<_, CategoryWithCountDto>(
            r#"
            SELECT
                c.id,
                c.name,
                c.slug,
                c.description,
                c.icon,
                c.display_order,
                COUNT(a.id) AS ad_count
            FROM categories c
            LEFT JOIN ads a ON a.category_id = c.id AND a.is_active
            WHERE c.is_active
            GROUP BY c.id, c.name, c.slug, c.description, c.icon, c.display_order
            ORDER BY c.display_order, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryWithCountDto> {
        let category = sqlx::query_as::<_, CategoryWithCountDto>(
            r#"
            SELECT
                c.id,
                c.name,
                c.slug,
                c.description,
                c.icon,
                c.display_order,
                COUNT(a.id) AS ad_count
            FROM categories c
            LEFT JOIN ads a ON a.category_id = c.id AND a.is_active
            WHERE c.slug = $1 AND c.is_active
            GROUP BY c.id, c.name, c.slug, c.description, c.icon, c.display_order
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?;

        category.ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }
}
