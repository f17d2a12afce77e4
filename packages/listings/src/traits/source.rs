//! Source trait for pluggable listing extraction.
//!
//! A source turns one retailer's raw response (HTML markup or JSON
//! payload) into a sequence of [`Product`] records. Each source is
//! independent: it shares no state with the others, and the aggregator
//! isolates its failures.

use async_trait::async_trait;

use crate::error::ScrapeResult;
use crate::types::Product;

/// A retailer listing source.
///
/// Implementations fetch their own document and extract records from
/// it. An empty result is valid (the retailer may list nothing);
/// a fetch or structural parse failure is an error for the caller to
/// handle. Items missing required fields are skipped silently rather
/// than reported.
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch the retailer's data and extract all listed products,
    /// in document/payload order.
    async fn collect(&self) -> ScrapeResult<Vec<Product>>;

    /// Source name for logging ("Elisa", "DNA", ...).
    fn name(&self) -> &str;
}
