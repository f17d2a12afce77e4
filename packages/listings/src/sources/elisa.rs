//! Elisa, via their developer API.

use crate::fetch::HttpFetcher;
use crate::sources::api::{ApiConfig, ApiSource};

pub const STORE: &str = "Elisa";

const CATALOG_URL: &str = "https://api.elisa.fi/v1/products?category=phones";

pub fn source(fetcher: HttpFetcher) -> ApiSource {
    ApiSource::new(
        ApiConfig::new(STORE, CATALOG_URL, "name", "price", "images")
            .with_description_key("description")
            .with_category_key("category"),
        fetcher,
    )
}
