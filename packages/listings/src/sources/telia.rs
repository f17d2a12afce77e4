//! Telia, scraped from their phone listing page.

use crate::error::ScrapeResult;
use crate::fetch::HttpFetcher;
use crate::sources::markup::{MarkupConfig, MarkupSource};

pub const STORE: &str = "Telia";

const LISTING_URL: &str = "https://www.telia.fi/kauppa/puhelimet";

pub fn source(fetcher: HttpFetcher) -> ScrapeResult<MarkupSource> {
    MarkupSource::new(
        MarkupConfig::new(
            STORE,
            LISTING_URL,
            ".product-card",
            ".product-title",
            ".product-price",
        ),
        fetcher,
    )
}
