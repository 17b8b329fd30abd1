use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category reference attached to an ad
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdCategoryRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Owner reference attached to an ad
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdOwnerRef {
    pub id: Uuid,
    pub name: String,
}

/// An ad image with its derived public URL
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdImageDto {
    pub id: Uuid,
    pub url: String,
    pub display_order: i32,
    pub is_primary: bool,
}

/// Ad as shown in feeds and lists.
///
/// `images` is only populated where the listing eagerly attaches them
/// (latest-ads feeds); featured cards carry category and owner only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub category: AdCategoryRef,
    pub user: AdOwnerRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<AdImageDto>>,
}

/// Full ad detail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdDetailDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: AdCategoryRef,
    pub user: AdOwnerRef,
    pub images: Vec<AdImageDto>,
}

/// Request body for creating an ad
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAdDto {
    #[validate(length(min = 3, max = 150, message = "Title must be 3-150 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    #[serde(default)]
    pub description: String,

    pub category_id: Uuid,
}
