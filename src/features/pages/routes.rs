use axum::{routing::get, Router};

use crate::features::pages::handlers;

pub fn routes() -> Router {
    Router::new()
        .route("/api/pages/how-it-works", get(handlers::how_it_works))
        .route("/api/pages/faq", get(handlers::faq))
        .route("/api/pages/help", get(handlers::help))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes()).unwrap()
    }

    #[tokio::test]
    async fn test_how_it_works_returns_metadata() {
        let response = server().get("/api/pages/how-it-works").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["meta_title"],
            "Comment ça marche - FAISTROQUER"
        );
        assert!(body["data"]["meta_description"]
            .as_str()
            .unwrap()
            .contains("FAISTROQUER"));
    }

    #[tokio::test]
    async fn test_faq_returns_metadata() {
        let response = server().get("/api/pages/faq").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["meta_title"],
            "FAQ - Questions fréquentes - FAISTROQUER"
        );
    }

    #[tokio::test]
    async fn test_help_returns_metadata() {
        let response = server().get("/api/pages/help").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["meta_title"], "Aide et Support - FAISTROQUER");
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let response = server().get("/api/pages/about").await;
        response.assert_status_not_found();
    }
}
