use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Author reference attached to an article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleAuthorRef {
    pub id: Uuid,
    pub name: String,
}

/// An article image with its derived public URL
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleImageDto {
    pub id: Uuid,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_primary: bool,
}

/// A published article as shown in lists and on the home feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub published_at: DateTime<Utc>,
    /// Display-formatted publish date ("DD Mon YYYY")
    pub formatted_date: String,
    pub user: ArticleAuthorRef,
}

/// Full article detail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub formatted_date: String,
    pub user: ArticleAuthorRef,
    pub images: Vec<ArticleImageDto>,
}

/// Format a publish timestamp for display ("04 Mar 2025")
pub fn format_publish_date(published_at: DateTime<Utc>) -> String {
    published_at.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_publish_date() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap();
        assert_eq!(format_publish_date(dt), "04 Mar 2025");
    }

    #[test]
    fn test_format_publish_date_pads_day() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(format_publish_date(dt), "01 Dec 2024");
    }
}
