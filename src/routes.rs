//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `/api/*`        - JSON API (Bearer session token, auth endpoints public)
//! - `/dashboard/*`  - web UI (cookie session for the app shell)
//! - `/static/*`     - static assets
//! - `GET /health`   - liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Authentication** - Bearer token (API) or cookie session (web)
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::response::Redirect;
use axum::routing::get;
use axum::{middleware, Json, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let api_router = api::routes::public_routes().merge(api_protected);

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );
    let web_router = web::routes::public_routes().merge(web_protected);

    let router = Router::new()
        .route("/", get(|| async { Redirect::permanent("/dashboard") }))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/dashboard", web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
