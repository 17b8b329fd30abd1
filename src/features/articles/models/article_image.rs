use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an article image
#[derive(Debug, Clone, FromRow)]
pub struct ArticleImage {
    pub id: Uuid,
    pub article_id: Uuid,
    pub path: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}
