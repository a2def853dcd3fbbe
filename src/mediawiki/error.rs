use thiserror::Error;

/// Failures from the upstream MediaWiki API, classified by layer.
///
/// All three kinds are terminal for the enclosing operation; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum MediaWikiError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, malformed URL).
    #[error("request to MediaWiki failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status; carries the raw body
    /// verbatim as the diagnostic payload.
    #[error("MediaWiki returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode MediaWiki response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type MediaWikiResult<T> = Result<T, MediaWikiError>;
