mod ad_dto;
mod image_dto;

pub use ad_dto::{AdCategoryRef, AdDetailDto, AdImageDto, AdOwnerRef, AdSummaryDto, CreateAdDto};
pub use image_dto::{
    extension_for_content_type, is_image_mime_type_allowed, DeleteImageResponseDto,
    UploadImageForm, ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_SIZE,
};
