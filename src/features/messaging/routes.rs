use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::messaging::handlers;
use crate::features::messaging::services::MessageService;

/// All messaging routes require authentication
pub fn protected_routes(service: Arc<MessageService>) -> Router {
    Router::new()
        .route(
            "/api/messages",
            get(handlers::list_messages).post(handlers::send_message),
        )
        .route("/api/messages/{id}/read", patch(handlers::mark_message_read))
        .with_state(service)
}
