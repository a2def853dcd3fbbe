use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::MediaWikiConfig;
use crate::models::{PageViews, WikiPage};

use super::error::MediaWikiResult;
use super::transport::Transport;

const FORMAT_JSON: &str = "json";

/// Upstream cap on ids per pageviews request.
pub const VIEWS_REQUEST_BATCH_SIZE: usize = 20;

/// Upstream cap on geosearch results; results past this are not paginated.
pub const GEOSEARCH_LIMIT: u32 = 500;

/// Client for the MediaWiki query API, aggregating results the upstream
/// only exposes in size-limited or per-page form.
#[derive(Clone)]
pub struct MediaWikiService {
    transport: Transport,
}

impl MediaWikiService {
    pub fn new(config: &MediaWikiConfig) -> MediaWikiResult<Self> {
        let transport = Transport::new(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self { transport })
    }

    /// Summed view counts for an arbitrary number of page ids.
    ///
    /// The upstream accepts at most [`VIEWS_REQUEST_BATCH_SIZE`] ids per
    /// request, so the input is split into contiguous batches, issued
    /// sequentially, and merged. The first failing batch aborts the whole
    /// call and discards everything accumulated so far; later batches are
    /// not attempted. Zero ids means zero requests and an empty map.
    pub async fn get_views(&self, pageids: &[String]) -> MediaWikiResult<PageViews> {
        let mut pages_with_views = PageViews::new();

        for batch in pageids.chunks(VIEWS_REQUEST_BATCH_SIZE) {
            let batch_views = self.get_views_batch(batch).await?;
            pages_with_views.extend(batch_views);
        }

        Ok(pages_with_views)
    }

    async fn get_views_batch(&self, pageids: &[String]) -> MediaWikiResult<PageViews> {
        let joined = pageids.join("|");
        debug!(batch_len = pageids.len(), "requesting pageviews batch");

        let body = self
            .transport
            .get(&[
                ("action", "query"),
                ("prop", "pageviews"),
                ("pageids", &joined),
                ("format", FORMAT_JSON),
            ])
            .await?;

        let response: PageViewsResponse = serde_json::from_str(&body)?;

        Ok(response
            .query
            .pages
            .into_iter()
            .map(|(id, page)| (id, page.sum()))
            .collect())
    }

    /// Pages inside a bounding box, in upstream relevance order.
    ///
    /// `bbox` is the upstream `south,west,north,east` form, validated by
    /// the caller. At most [`GEOSEARCH_LIMIT`] results come back.
    pub async fn search_wiki_pages(&self, bbox: &str) -> MediaWikiResult<Vec<WikiPage>> {
        debug!(%bbox, "requesting geosearch");

        let limit = GEOSEARCH_LIMIT.to_string();
        let body = self
            .transport
            .get(&[
                ("action", "query"),
                ("list", "geosearch"),
                ("gsbbox", bbox),
                ("gslimit", &limit),
                ("format", FORMAT_JSON),
            ])
            .await?;

        let response: GeosearchResponse = serde_json::from_str(&body)?;

        Ok(response
            .query
            .geosearch
            .into_iter()
            .map(|page| WikiPage {
                page_id: page.pageid.to_string(),
                title: page.title,
                lat: page.lat,
                lon: page.lon,
            })
            .collect())
    }

    /// The most viewed pages inside a bounding box.
    ///
    /// Composes geosearch and batched views: pages are ranked descending
    /// by summed view count, ties keep geosearch order, pages the views
    /// query did not report rank as zero, and only the top `limit` are
    /// returned.
    pub async fn popular_pages_preview(
        &self,
        bbox: &str,
        limit: usize,
    ) -> MediaWikiResult<Vec<WikiPage>> {
        let pages = self.search_wiki_pages(bbox).await?;

        let pageids: Vec<String> = pages.iter().map(|page| page.page_id.clone()).collect();
        let views = self.get_views(&pageids).await?;

        Ok(rank_by_views(pages, &views, limit))
    }
}

/// Rank `pages` descending by their summed view counts.
///
/// Pages missing from `views` count as zero and are kept; the sort is
/// stable, so equal counts preserve the incoming geosearch order.
fn rank_by_views(mut pages: Vec<WikiPage>, views: &PageViews, limit: usize) -> Vec<WikiPage> {
    pages.sort_by_key(|page| Reverse(views.get(&page.page_id).copied().unwrap_or(0)));
    pages.truncate(limit);
    pages
}

// Wire shapes of the upstream JSON envelope. Only the fields the
// aggregators read are modeled.

#[derive(Debug, Deserialize)]
struct PageViewsResponse {
    query: PageViewsQuery,
}

#[derive(Debug, Deserialize)]
struct PageViewsQuery {
    #[serde(default)]
    pages: HashMap<String, PageViewsEntry>,
}

#[derive(Debug, Deserialize)]
struct PageViewsEntry {
    #[serde(default)]
    pageviews: HashMap<String, Option<u64>>,
}

impl PageViewsEntry {
    /// Sum of the daily series; days the upstream reports as null count 0.
    fn sum(&self) -> u64 {
        self.pageviews.values().map(|day| day.unwrap_or(0)).sum()
    }
}

#[derive(Debug, Deserialize)]
struct GeosearchResponse {
    query: GeosearchQuery,
}

#[derive(Debug, Deserialize)]
struct GeosearchQuery {
    #[serde(default)]
    geosearch: Vec<GeosearchEntry>,
}

#[derive(Debug, Deserialize)]
struct GeosearchEntry {
    pageid: u64,
    title: String,
    lat: f64,
    lon: f64,
}
