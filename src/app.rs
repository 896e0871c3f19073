//! # Router
//!
//! Wires the handlers to their routes and applies the middleware stack.
//! Kept apart from `main` so tests can drive the full router without a socket.

use crate::handlers::auth::login;
use crate::handlers::greeting::{good_night, hello_night_world, hello_world};
use crate::handlers::health::health_check;
use crate::middleware::request_id::request_id_layer;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// Layers run outermost-first in reverse order of `.layer` calls, so the
/// request-id span wraps tracing, CORS and the handlers.
pub fn build_router(state: AppState) -> Router {
    // Any origin may call the API with credentials. Wildcards can't be combined
    // with credentials, so the request's own origin/method/headers are echoed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Greetings
        .route("/", get(hello_world))
        .route("/night", get(hello_night_world))
        .route("/night/{id}", get(good_night))

        // Login against the user record store
        .route("/login", post(login))

        // Store connectivity
        .route("/health", get(health_check))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_id_layer))
        .with_state(state)
}
