pub mod error;
pub mod service;
pub mod transport;

pub use error::{MediaWikiError, MediaWikiResult};
pub use service::{MediaWikiService, GEOSEARCH_LIMIT, VIEWS_REQUEST_BATCH_SIZE};
pub use transport::Transport;
