use crate::{AppState, health, login, send_sms, signup};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/ping", get(health::ping))
        // Account endpoints
        .route("/signup", post(signup))
        .route("/login", post(login))
        // SMS relay
        .route("/send-sms", post(send_sms))
        // Add shared state
        .with_state(state)
        // CORS middleware (any origin, method and header)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
