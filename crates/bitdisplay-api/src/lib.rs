//! # bitdisplay-api: Axum HTTP Service
//!
//! Serves the structured decisions behind the `.bit` display images. Pixel
//! rendering happens downstream; this service returns JSON.
//!
//! ## API Surface
//!
//! | Route | Module | Cache TTL |
//! |---|---|---|
//! | `/identicon/{name}` | [`routes::identicon`] | 30 days |
//! | `/avatar/image/{account}`, `/avatar/{account}` | [`routes::avatar`] | 30 days |
//! | `/erc721/card/{account}` | [`routes::erc721`] | 10 s |
//! | `/erc721/data/{account}` | [`routes::erc721`] | 10 s |
//! | `/category/{account}` | [`routes::category`] | 1 hour |
//! | `/health/liveness` | - | - |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```

pub mod cache;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use cache::ResponseCache;
pub use error::AppError;
pub use state::{ApiConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::identicon::router())
        .merge(routes::avatar::router())
        .merge(routes::erc721::router())
        .merge(routes::category::router())
        .with_state(state);

    let health = Router::new().route("/health/liveness", get(liveness));

    Router::new()
        .merge(health)
        .merge(api)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Unmatched routes get the structured error body.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}
