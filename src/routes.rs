// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, interaction, posts},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the liveness/diagnostic routes and the post routes.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store handle + config).
pub fn create_router(state: AppState) -> Router {
    // Browser clients may be served from anywhere.
    let cors = CorsLayer::permissive();

    let post_routes = Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}/like", post(interaction::like_post))
        .route("/{id}/comments", post(interaction::add_comment));

    Router::new()
        .route("/", get(health::root))
        .route("/test", get(health::diagnostics))
        .nest("/api/posts", post_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
