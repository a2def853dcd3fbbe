use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::FrontendConfig;
use crate::mediawiki::MediaWikiService;

use super::handlers::{health_check, page_views, popular_pages, search_pages, AppState};
use super::static_files::serve_static;

pub fn create_api_router(mediawiki: MediaWikiService, frontend: FrontendConfig) -> Router {
    let state = Arc::new(AppState { mediawiki });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/pages", get(search_pages))
        .route("/api/pages/views", get(page_views))
        .route("/api/pages/popular", get(popular_pages))
        .layer(CorsLayer::permissive())
        .with_state(state)
        .fallback(move |uri: Uri| {
            let frontend = frontend.clone();
            async move { serve_static(uri, frontend).await }
        })
}
