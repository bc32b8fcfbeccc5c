//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static page. This router serves it from the website
//! directory at `/`, the compiled `page` bundle at `/pkg`, and a health probe
//! for process supervisors. There is no other API.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Build the preview router.
pub fn app(config: &Config) -> Router {
    let website_service = ServeDir::new(&config.website_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(website_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
