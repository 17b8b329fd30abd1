use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ads::dtos::AdSummaryDto;
use crate::features::articles::dtos::ArticleSummaryDto;
use crate::features::categories::dtos::CategoryWithCountDto;

/// Everything the landing page renders in one payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeFeedDto {
    pub categories: Vec<CategoryWithCountDto>,
    pub featured_ads: Vec<AdSummaryDto>,
    pub latest_ads: Vec<AdSummaryDto>,
    pub articles: Vec<ArticleSummaryDto>,
}
