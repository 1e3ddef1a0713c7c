//! Axum router configuration with middleware.
//!
//! The chat relay lives at `/api/chat`, with `/api/gpt` as an alias; both
//! cap the request body at [`MAX_CHAT_BODY_BYTES`]. Demo data and provider
//! info are under `/api/v1/`. Middleware: CORS, tracing.
//!
//! If a built SPA directory exists, it is served as a fallback; unknown
//! paths get its `index.html` for client-side routing. If the directory does
//! not exist, only the API is served.

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::extractors::body::MAX_CHAT_BODY_BYTES;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, web_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let v1_routes = Router::new()
        .route("/demo/brainwaves", get(handlers::demo::get_brainwaves))
        .route("/demo/traits", get(handlers::demo::get_traits))
        .route("/demo/profile", get(handlers::demo::get_profile))
        .route("/demo/environment", get(handlers::demo::get_environment))
        .route("/demo/dream", get(handlers::demo::get_dream))
        .route("/demo/dream/stats", post(handlers::demo::post_dream_stats))
        .route("/demo/sleep", get(handlers::demo::get_sleep))
        .route("/provider", get(handlers::provider::get_provider));

    // `any` so the relay itself answers non-POST methods with the JSON envelope
    let chat = any(handlers::chat::proxy_chat).layer(DefaultBodyLimit::max(MAX_CHAT_BODY_BYTES));

    let mut router = Router::new()
        .route("/api/chat", chat.clone())
        .route("/api/gpt", chat)
        .nest("/api/v1", v1_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(web_dir).exists() {
        let index_path = format!("{}/index.html", web_dir);
        let serve_dir = ServeDir::new(web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
