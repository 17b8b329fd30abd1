mod article_dto;

pub use article_dto::{
    format_publish_date, ArticleAuthorRef, ArticleDetailDto, ArticleImageDto, ArticleSummaryDto,
};
