use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted upload size for an image (5 MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for image uploads
pub const ALLOWED_IMAGE_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "image/gif"];

pub fn is_image_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_MIME_TYPES.contains(&content_type)
}

/// File extension for a given image content type
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    mime_guess::get_mime_extensions_str(content_type).and_then(|exts| exts.first().copied())
}

/// Multipart form schema for image uploads (documentation only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadImageForm {
    /// The image file
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

/// Response body confirming an image deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteImageResponseDto {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_mime_types() {
        assert!(is_image_mime_type_allowed("image/jpeg"));
        assert!(is_image_mime_type_allowed("image/png"));
        assert!(!is_image_mime_type_allowed("application/pdf"));
        assert!(!is_image_mime_type_allowed("text/html"));
    }

    #[test]
    fn test_extension_lookup() {
        assert!(extension_for_content_type("image/png").is_some());
        assert!(extension_for_content_type("not/a-mime-anyone-knows").is_none());
    }
}
