pub mod api_routes;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::service::relay_service::RelayService;
use api_routes::{health_handler, invalidate_seed_handler, method_not_allowed, relay_handler};

pub const RELAY_PATH: &str = "/api/gemini";

/// Builds the application router. When `static_dir` is set, unmatched paths
/// are served from it (the compiled frontend).
pub fn router(svc: RelayService, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route(RELAY_PATH, post(relay_handler).fallback(method_not_allowed))
        .route("/api/seed/invalidate", post(invalidate_seed_handler))
        .route("/api/health", get(health_handler));

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(svc)
}
