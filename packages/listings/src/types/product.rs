//! The canonical product record.

use serde::{Deserialize, Serialize};

/// Category applied when a source does not report one.
pub const DEFAULT_CATEGORY: &str = "Phones";

/// A normalized product listing.
///
/// Every source produces these, the aggregator concatenates them, and
/// the persistence sink consumes each exactly once. A record is never
/// mutated after construction.
///
/// `title` and `price` are always non-empty: candidate items missing
/// either never leave the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within one aggregation run. Taken from the source when it
    /// exposes a native identifier, generated otherwise.
    pub id: String,

    /// Product name as shown by the retailer
    pub title: String,

    /// Raw price text, currency and formatting untouched
    pub price: String,

    /// Name of the source retailer ("Elisa", "DNA", "Telia")
    pub store: String,

    /// Source description, or the store's fallback text
    pub description: String,

    /// Primary image URL, empty when the source has none
    pub image: String,

    /// Full image list when the source provides one
    pub image_urls: Vec<String>,

    /// Listing category
    pub category: String,
}

impl Product {
    /// The fixed description used when a source has none for an item.
    pub fn fallback_description(store: &str) -> String {
        format!("Product from {store} scraped automatically.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_description_names_the_store() {
        assert_eq!(
            Product::fallback_description("DNA"),
            "Product from DNA scraped automatically."
        );
    }
}
