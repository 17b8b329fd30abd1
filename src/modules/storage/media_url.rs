//! Public URL derivation for image records.
//!
//! The `url` of an image is never stored; it is computed on read from the
//! stored relative `path`. Rows without a file fall back to a fixed default
//! asset, one per owning entity type.

use crate::core::config::AssetsConfig;
use crate::modules::storage::MinIOClient;
use crate::shared::constants::{DEFAULT_AD_IMAGE_ASSET, DEFAULT_ARTICLE_IMAGE_ASSET};

pub struct MediaUrlResolver {
    storage_base: String,
    assets_base: String,
}

impl MediaUrlResolver {
    pub fn new(storage: &MinIOClient, assets: &AssetsConfig) -> Self {
        Self {
            storage_base: storage.public_base_url(),
            assets_base: assets.base_url.clone(),
        }
    }

    /// URL for an ad image; falls back to the default ad asset
    pub fn ad_image_url(&self, path: Option<&str>) -> String {
        self.resolve(path, DEFAULT_AD_IMAGE_ASSET)
    }

    /// URL for an article image; falls back to the default article asset
    pub fn article_image_url(&self, path: Option<&str>) -> String {
        self.resolve(path, DEFAULT_ARTICLE_IMAGE_ASSET)
    }

    fn resolve(&self, path: Option<&str>, default_asset: &str) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}/{}", self.storage_base, p),
            _ => format!("{}/{}", self.assets_base, default_asset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaUrlResolver {
        MediaUrlResolver {
            storage_base: "http://localhost:9000/faistroquer-media".to_string(),
            assets_base: "https://faistroquer.fr/images".to_string(),
        }
    }

    #[test]
    fn test_stored_path_uses_storage_url() {
        let r = resolver();
        assert_eq!(
            r.ad_image_url(Some("ads/abc/1.jpg")),
            "http://localhost:9000/faistroquer-media/ads/abc/1.jpg"
        );
    }

    #[test]
    fn test_missing_path_falls_back_to_default_asset() {
        let r = resolver();
        assert_eq!(
            r.ad_image_url(None),
            "https://faistroquer.fr/images/default-ad-image.png"
        );
        assert_eq!(
            r.ad_image_url(Some("")),
            "https://faistroquer.fr/images/default-ad-image.png"
        );
    }

    #[test]
    fn test_article_default_differs_from_ad_default() {
        let r = resolver();
        assert_eq!(
            r.article_image_url(None),
            "https://faistroquer.fr/images/default-article-image.png"
        );
        assert_ne!(r.article_image_url(None), r.ad_image_url(None));
    }
}
