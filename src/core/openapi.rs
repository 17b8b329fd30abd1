use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::ads::{dtos as ads_dtos, handlers as ads_handlers};
use crate::features::articles::{dtos as articles_dtos, handlers as articles_handlers};
use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::home::{dtos as home_dtos, handlers as home_handlers};
use crate::features::messaging::{dtos as messaging_dtos, handlers as messaging_handlers};
use crate::features::pages::{dtos as pages_dtos, handlers as pages_handlers};
use crate::features::propositions::{
    dtos as propositions_dtos, handlers as propositions_handlers,
    models as propositions_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Home
        home_handlers::get_home_feed,
        // Pages
        pages_handlers::how_it_works,
        pages_handlers::faq,
        pages_handlers::help,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Ads
        ads_handlers::list_ads,
        ads_handlers::get_ad,
        ads_handlers::create_ad,
        ads_handlers::delete_ad,
        ads_handlers::upload_ad_image,
        ads_handlers::delete_ad_image,
        // Articles
        articles_handlers::list_articles,
        articles_handlers::get_article,
        articles_handlers::delete_article_image,
        // Propositions
        propositions_handlers::list_propositions,
        propositions_handlers::create_proposition,
        // Messages
        messaging_handlers::list_messages,
        messaging_handlers::send_message,
        messaging_handlers::mark_message_read,
        // Dashboard
        dashboard_handlers::get_dashboard,
        // Users
        users_handlers::get_me,
    ),
    components(
        schemas(
            // Shared
            Meta,
            auth::model::AuthenticatedUser,
            // Home
            home_dtos::HomeFeedDto,
            ApiResponse<home_dtos::HomeFeedDto>,
            // Pages
            pages_dtos::PageMetaDto,
            ApiResponse<pages_dtos::PageMetaDto>,
            // Categories
            categories_dtos::CategoryWithCountDto,
            ApiResponse<Vec<categories_dtos::CategoryWithCountDto>>,
            ApiResponse<categories_dtos::CategoryWithCountDto>,
            // Ads
            ads_dtos::AdCategoryRef,
            ads_dtos::AdOwnerRef,
            ads_dtos::AdImageDto,
            ads_dtos::AdSummaryDto,
            ads_dtos::AdDetailDto,
            ads_dtos::CreateAdDto,
            ads_dtos::UploadImageForm,
            ads_dtos::DeleteImageResponseDto,
            ApiResponse<Vec<ads_dtos::AdSummaryDto>>,
            ApiResponse<ads_dtos::AdDetailDto>,
            ApiResponse<ads_dtos::AdImageDto>,
            ApiResponse<ads_dtos::DeleteImageResponseDto>,
            // Articles
            articles_dtos::ArticleAuthorRef,
            articles_dtos::ArticleImageDto,
            articles_dtos::ArticleSummaryDto,
            articles_dtos::ArticleDetailDto,
            ApiResponse<Vec<articles_dtos::ArticleSummaryDto>>,
            ApiResponse<articles_dtos::ArticleDetailDto>,
            // Propositions
            propositions_models::PropositionStatus,
            propositions_dtos::PropositionAdRef,
            propositions_dtos::PropositionUserRef,
            propositions_dtos::PropositionDto,
            propositions_dtos::CreatePropositionDto,
            ApiResponse<Vec<propositions_dtos::PropositionDto>>,
            ApiResponse<propositions_dtos::PropositionDto>,
            // Messages
            messaging_dtos::MessageKind,
            messaging_dtos::MessageUserRef,
            messaging_dtos::MessageAdRef,
            messaging_dtos::MessageSummaryDto,
            messaging_dtos::SendMessageDto,
            ApiResponse<Vec<messaging_dtos::MessageSummaryDto>>,
            ApiResponse<messaging_dtos::MessageSummaryDto>,
            // Dashboard
            dashboard_dtos::PropositionStatsDto,
            dashboard_dtos::DashboardDto,
            ApiResponse<dashboard_dtos::DashboardDto>,
            // Users
            users_dtos::UserProfileDto,
            ApiResponse<users_dtos::UserProfileDto>,
        )
    ),
    tags(
        (name = "home", description = "Landing page feed"),
        (name = "pages", description = "Static informational pages"),
        (name = "categories", description = "Ad categories with counts"),
        (name = "ads", description = "Classified ads and their images"),
        (name = "articles", description = "Published articles"),
        (name = "propositions", description = "Barter propositions"),
        (name = "messages", description = "User-to-user messages"),
        (name = "dashboard", description = "Authenticated user dashboard"),
        (name = "users", description = "User profile"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "FAISTROQUER API",
        version = "0.1.0",
        description = "API documentation for FAISTROQUER",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
