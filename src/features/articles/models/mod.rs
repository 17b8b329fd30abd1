mod article_image;

pub use article_image::ArticleImage;
