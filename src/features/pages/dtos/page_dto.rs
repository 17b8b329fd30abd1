use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// SEO metadata for a static informational page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageMetaDto {
    pub meta_title: String,
    pub meta_description: String,
}

impl PageMetaDto {
    pub fn new(meta_title: &str, meta_description: &str) -> Self {
        Self {
            meta_title: meta_title.to_string(),
            meta_description: meta_description.to_string(),
        }
    }
}
