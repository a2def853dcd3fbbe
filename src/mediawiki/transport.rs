use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::error::{MediaWikiError, MediaWikiResult};

/// Construct-once GET transport for the MediaWiki API.
///
/// Holds the connection pool and the configured endpoint for the lifetime
/// of the process; every aggregation call reuses it. No retry, no backoff:
/// one request per call, bounded by the configured timeout.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> MediaWikiResult<Self> {
        let client = Client::builder()
            .user_agent("geowiki/0.1.0")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue one GET with the given query pairs.
    ///
    /// Returns the body text only for HTTP 200; any other status becomes
    /// [`MediaWikiError::Api`] carrying the status and the raw body.
    /// The body is read to completion on both paths so reqwest can return
    /// the connection to the pool.
    pub async fn get(&self, query: &[(&str, &str)]) -> MediaWikiResult<String> {
        let response = self.client.get(&self.base_url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;

        match status {
            StatusCode::OK => Ok(body),
            _ => Err(MediaWikiError::Api {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
