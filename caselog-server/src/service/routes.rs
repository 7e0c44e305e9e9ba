// Route definitions for the validation service

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Creates the router with all routes configured.
///
/// CORS is permissive: the validation endpoint is called cross-origin by
/// whatever front end hosts the form, and carries no credentials.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/validate-session-note",
            post(handlers::validate_session_note),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
