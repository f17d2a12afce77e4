//! Typed errors for the listing pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the collector
//! binary wraps these in `anyhow` at the top level.

use thiserror::Error;

/// Errors that can occur while collecting listings from a source.
///
/// These surface out of a source's `collect` call and are caught by the
/// aggregator; a per-item field that is merely missing is not an error
/// (the item is skipped instead).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or transport failure while fetching a source document
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source answered with a non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The fetched document or payload does not have the expected shape
    #[error("malformed document from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// A retailer configuration carries a selector that does not parse
    #[error("invalid selector: {selector}")]
    Selector { selector: String },
}

/// Errors that can occur while persisting a record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend is unavailable or failed mid-write
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend refused this particular record
    #[error("record rejected by storage: {reason}")]
    Rejected { reason: String },
}

/// Result type alias for scraping operations.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
