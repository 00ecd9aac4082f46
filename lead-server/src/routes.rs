use crate::api::leads::leads::create_lead;
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health and diagnostic endpoints
        .route("/", get(health::root))
        .route("/api/hello", get(health::hello))
        .route("/test", get(health::diagnostics))
        // Lead submission
        .route("/api/lead", post(create_lead))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins, the form is embedded on several sites)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
