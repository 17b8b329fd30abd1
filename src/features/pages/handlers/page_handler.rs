use axum::Json;

use crate::features::pages::dtos::PageMetaDto;
use crate::shared::types::ApiResponse;

/// "How it works" page metadata
#[utoipa::path(
    get,
    path = "/api/pages/how-it-works",
    responses(
        (status = 200, description = "Page metadata", body = ApiResponse<PageMetaDto>),
    ),
    tag = "pages"
)]
pub async fn how_it_works() -> Json<ApiResponse<PageMetaDto>> {
    Json(ApiResponse::success(
        Some(PageMetaDto::new(
            "Comment ça marche - FAISTROQUER",
            "Découvrez comment fonctionne FAISTROQUER, la plateforme d'échange \
             de biens et services. Apprenez à échanger en toute confiance.",
        )),
        None,
        None,
    ))
}

/// FAQ page metadata
#[utoipa::path(
    get,
    path = "/api/pages/faq",
    responses(
        (status = 200, description = "Page metadata", body = ApiResponse<PageMetaDto>),
    ),
    tag = "pages"
)]
pub async fn faq() -> Json<ApiResponse<PageMetaDto>> {
    Json(ApiResponse::success(
        Some(PageMetaDto::new(
            "FAQ - Questions fréquentes - FAISTROQUER",
            "Trouvez les réponses à vos questions sur FAISTROQUER. Consultez \
             notre FAQ pour tout savoir sur le fonctionnement de la plateforme.",
        )),
        None,
        None,
    ))
}

/// Help and support page metadata
#[utoipa::path(
    get,
    path = "/api/pages/help",
    responses(
        (status = 200, description = "Page metadata", body = ApiResponse<PageMetaDto>),
    ),
    tag = "pages"
)]
pub async fn help() -> Json<ApiResponse<PageMetaDto>> {
    Json(ApiResponse::success(
        Some(PageMetaDto::new(
            "Aide et Support - FAISTROQUER",
            "Besoin d'aide ? Consultez notre centre d'aide pour trouver des \
             réponses à vos questions et obtenir de l'assistance.",
        )),
        None,
        None,
    ))
}
