//! Retailer listing pipeline.
//!
//! Collects phone-product listings from retailer websites and APIs,
//! normalizes them into one [`Product`] record shape, and persists them
//! to a key-value style store:
//!
//! fetch → extract → aggregate → upsert
//!
//! Each retailer is a small configuration fed into one of two shared
//! extractor templates ([`sources::MarkupSource`] for HTML pages,
//! [`sources::ApiSource`] for JSON catalogs). The aggregator runs every
//! source once in a fixed order and tolerates individual source
//! failures; the sink writes each record independently, so one bad
//! record never blocks the rest.
//!
//! # Usage
//!
//! ```rust,ignore
//! use listings::{aggregate, sink, sources, HttpFetcher, MemoryStore};
//!
//! let fetcher = HttpFetcher::new();
//! let registry = sources::all(&fetcher)?;
//! let store = MemoryStore::new();
//!
//! let products = aggregate::collect_all(&registry).await;
//! let summary = sink::persist_all(&store, &products).await;
//! ```
//!
//! # Modules
//!
//! - [`types`] - The canonical product record
//! - [`traits`] - The two seams: [`Source`] and [`ProductStore`]
//! - [`fetch`] - Shared HTTP helper
//! - [`sources`] - Extractor templates and retailer configurations
//! - [`aggregate`] - Failure-isolating source runner
//! - [`sink`] - Independent per-record persistence
//! - [`stores`] - Storage implementations (memory, postgres)
//! - [`testing`] - Test doubles for the seams

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod sink;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ScrapeError, ScrapeResult, StoreError, StoreResult};
pub use fetch::HttpFetcher;
pub use sink::PersistSummary;
pub use stores::MemoryStore;
pub use traits::{ProductStore, Source};
pub use types::Product;

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;
