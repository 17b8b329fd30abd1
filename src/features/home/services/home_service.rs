use std::sync::Arc;

use crate::core::error::Result;
use crate::features::ads::services::AdService;
use crate::features::articles::services::ArticleService;
use crate::features::categories::services::CategoryService;
use crate::features::home::dtos::HomeFeedDto;
use crate::shared::constants::{
    HOME_ARTICLES_LIMIT, HOME_FEATURED_ADS_LIMIT, HOME_LATEST_ADS_LIMIT,
};

/// Composes the landing page feed from the other services
pub struct HomeService {
    categories: Arc<CategoryService>,
    ads: Arc<AdService>,
    articles: Arc<ArticleService>,
}

impl HomeService {
    pub fn new(
        categories: Arc<CategoryService>,
        ads: Arc<AdService>,
        articles: Arc<ArticleService>,
    ) -> Self {
        Self {
            categories,
            ads,
            articles,
        }
    }

    pub async fn feed(&self) -> Result<HomeFeedDto> {
        let (categories, featured_ads, latest_ads, articles) = tokio::try_join!(
            self.categories.list_with_counts(),
            self.ads.featured(HOME_FEATURED_ADS_LIMIT),
            self.ads.latest(HOME_LATEST_ADS_LIMIT),
            self.articles.latest_published(HOME_ARTICLES_LIMIT),
        )?;

        Ok(HomeFeedDto {
            categories,
            featured_ads,
            latest_ads,
            articles,
        })
    }
}
