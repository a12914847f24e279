//! Storyloom — HTTP API.
//!
//! Exposes the turn, save and load operations over HTTP. The router is
//! built here so the binary and the integration tests share one route
//! table.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router over `app_state`.
pub fn build_router(app_state: state::AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api",
            routes::turn::router().merge(routes::saves::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
