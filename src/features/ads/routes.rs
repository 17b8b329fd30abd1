use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::features::ads::dtos::MAX_IMAGE_SIZE;
use crate::features::ads::handlers;
use crate::features::ads::services::{AdService, ImageService};

/// Public read routes for ads
pub fn public_routes(ad_service: Arc<AdService>) -> Router {
    Router::new()
        .route("/api/ads", get(handlers::list_ads))
        .route("/api/ads/{id}", get(handlers::get_ad))
        .with_state(ad_service)
}

/// Protected routes: ad creation/deletion and image management
pub fn protected_routes(ad_service: Arc<AdService>, image_service: Arc<ImageService>) -> Router {
    let ads = Router::new()
        .route("/api/ads", post(handlers::create_ad))
        .route("/api/ads/{id}", delete(handlers::delete_ad))
        .with_state(ad_service);

    let images = Router::new()
        .route(
            "/api/ads/{id}/images",
            post(handlers::upload_ad_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route("/api/ads/images/{id}", delete(handlers::delete_ad_image))
        .with_state(image_service);

    ads.merge(images)
}
