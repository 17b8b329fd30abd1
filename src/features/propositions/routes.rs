use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::propositions::handlers;
use crate::features::propositions::services::PropositionService;

/// All proposition routes require authentication
pub fn protected_routes(service: Arc<PropositionService>) -> Router {
    Router::new()
        .route(
            "/api/propositions",
            get(handlers::list_propositions).post(handlers::create_proposition),
        )
        .with_state(service)
}
