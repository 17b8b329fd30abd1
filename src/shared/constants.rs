/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// HOME FEED LIMITS
// =============================================================================

/// Number of featured ads on the home feed
pub const HOME_FEATURED_ADS_LIMIT: i64 = 8;

/// Number of latest ads on the home feed
pub const HOME_LATEST_ADS_LIMIT: i64 = 8;

/// Number of published articles on the home feed
pub const HOME_ARTICLES_LIMIT: i64 = 3;

// =============================================================================
// DASHBOARD
// =============================================================================

/// Number of recent message summaries shown on the dashboard
pub const DASHBOARD_RECENT_MESSAGES_LIMIT: i64 = 3;

// =============================================================================
// DEFAULT IMAGE ASSETS
// =============================================================================

/// Frontend asset used when an ad image row has no stored file
pub const DEFAULT_AD_IMAGE_ASSET: &str = "default-ad-image.png";

/// Frontend asset used when an article image row has no stored file
pub const DEFAULT_ARTICLE_IMAGE_ASSET: &str = "default-article-image.png";
