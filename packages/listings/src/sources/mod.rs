//! Listing sources: two shared extractor templates plus one small
//! configuration module per retailer.

pub mod api;
pub mod markup;

pub mod dna;
pub mod elisa;
pub mod telia;

pub use api::{ApiConfig, ApiSource};
pub use markup::{MarkupConfig, MarkupSource};

use crate::error::ScrapeResult;
use crate::fetch::HttpFetcher;
use crate::traits::Source;

/// Build every registered source, in its fixed invocation order.
pub fn all(fetcher: &HttpFetcher) -> ScrapeResult<Vec<Box<dyn Source>>> {
    Ok(vec![
        Box::new(elisa::source(fetcher.clone())),
        Box::new(dna::source(fetcher.clone())?),
        Box::new(telia::source(fetcher.clone())?),
    ])
}
