mod ad_service;
mod image_service;

pub use ad_service::AdService;
pub use image_service::ImageService;
