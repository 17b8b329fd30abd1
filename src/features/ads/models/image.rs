use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an ad image.
///
/// `path` is the relative object key in the media bucket; it may be NULL for
/// rows whose file was never stored. The public URL is derived on read.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: Uuid,
    pub ad_id: Uuid,
    pub path: Option<String>,
    pub display_order: i32,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}
