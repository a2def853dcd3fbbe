use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::mediawiki::{MediaWikiError, MediaWikiService};
use crate::models::{BoundingBox, BoundingBoxError, PageViews, WikiPage};

pub struct AppState {
    pub mediawiki: MediaWikiService,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct GeosearchParams {
    pub bbox: String,
}

#[derive(Deserialize)]
pub struct ViewsParams {
    /// Pipe-separated page ids, same list syntax as the upstream API.
    pub pageids: String,
}

#[derive(Deserialize)]
pub struct PopularParams {
    pub bbox: String,
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

fn default_preview_limit() -> usize {
    10
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map an upstream failure onto the gateway response.
fn upstream_error(err: MediaWikiError) -> HandlerError {
    tracing::warn!(error = %err, "MediaWiki request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn parse_bbox(bbox: &str) -> Result<BoundingBox, HandlerError> {
    bbox.parse()
        .map_err(|e: BoundingBoxError| bad_request(e.to_string()))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List pages inside a bounding box
pub async fn search_pages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeosearchParams>,
) -> Result<Json<Vec<WikiPage>>, HandlerError> {
    let bbox = parse_bbox(&params.bbox)?;

    let pages = state
        .mediawiki
        .search_wiki_pages(&bbox.to_string())
        .await
        .map_err(upstream_error)?;

    Ok(Json(pages))
}

/// Summed view counts for a pipe-separated page id list
pub async fn page_views(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewsParams>,
) -> Result<Json<PageViews>, HandlerError> {
    let pageids: Vec<String> = params
        .pageids
        .split('|')
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    if pageids.is_empty() {
        return Err(bad_request("pageids must contain at least one id"));
    }

    let views = state
        .mediawiki
        .get_views(&pageids)
        .await
        .map_err(upstream_error)?;

    Ok(Json(views))
}

/// Most viewed pages inside a bounding box
pub async fn popular_pages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PopularParams>,
) -> Result<Json<Vec<WikiPage>>, HandlerError> {
    let bbox = parse_bbox(&params.bbox)?;

    if params.limit == 0 {
        return Err(bad_request("limit must be at least 1"));
    }

    let pages = state
        .mediawiki
        .popular_pages_preview(&bbox.to_string(), params.limit)
        .await
        .map_err(upstream_error)?;

    Ok(Json(pages))
}
