//! Payload extractor template for API-based retailers.
//!
//! The JSON counterpart of the markup template: locate the items array,
//! pull values by key with defaults for absent keys, skip items missing
//! required fields. A retailer is a [`ApiConfig`] of field keys fed
//! into [`ApiSource`].

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ScrapeError, ScrapeResult};
use crate::fetch::HttpFetcher;
use crate::traits::Source;
use crate::types::{Product, DEFAULT_CATEGORY};

/// Field-key configuration for one JSON-API retailer.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Store name stamped on every extracted record
    pub store: String,

    /// Catalog endpoint URL
    pub url: String,

    /// Key holding the items array; `None` when the payload itself is
    /// the array
    pub items_key: Option<String>,

    /// Key of the item title
    pub title_key: String,

    /// Key of the item price (string or number)
    pub price_key: String,

    /// Key of the image URL array
    pub images_key: String,

    /// Key of the retailer's own item id, when the API exposes one
    pub id_key: Option<String>,

    /// Key of the item description
    pub description_key: Option<String>,

    /// Key of the item category
    pub category_key: Option<String>,
}

impl ApiConfig {
    pub fn new(
        store: impl Into<String>,
        url: impl Into<String>,
        title_key: impl Into<String>,
        price_key: impl Into<String>,
        images_key: impl Into<String>,
    ) -> Self {
        Self {
            store: store.into(),
            url: url.into(),
            items_key: None,
            title_key: title_key.into(),
            price_key: price_key.into(),
            images_key: images_key.into(),
            id_key: None,
            description_key: None,
            category_key: None,
        }
    }

    /// Read the items array from under this key instead of the top level.
    pub fn with_items_key(mut self, key: impl Into<String>) -> Self {
        self.items_key = Some(key.into());
        self
    }

    /// Use the retailer's own id field.
    pub fn with_id_key(mut self, key: impl Into<String>) -> Self {
        self.id_key = Some(key.into());
        self
    }

    /// Read per-item descriptions from this key.
    pub fn with_description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = Some(key.into());
        self
    }

    /// Read per-item categories from this key.
    pub fn with_category_key(mut self, key: impl Into<String>) -> Self {
        self.category_key = Some(key.into());
        self
    }
}

/// JSON catalog source driven by an [`ApiConfig`].
pub struct ApiSource {
    config: ApiConfig,
    fetcher: HttpFetcher,
}

impl ApiSource {
    pub fn new(config: ApiConfig, fetcher: HttpFetcher) -> Self {
        Self { config, fetcher }
    }

    /// Extract all products from a decoded payload, in payload order.
    fn extract(&self, payload: &Value) -> ScrapeResult<Vec<Product>> {
        let items = match &self.config.items_key {
            Some(key) => payload.get(key),
            None => Some(payload),
        }
        .and_then(Value::as_array)
        .ok_or_else(|| ScrapeError::Parse {
            url: self.config.url.clone(),
            reason: "expected a JSON array of items".to_string(),
        })?;

        let mut products = Vec::new();

        for item in items {
            let Some(title) = item.get(&self.config.title_key).and_then(text_value) else {
                continue;
            };
            let Some(price) = item.get(&self.config.price_key).and_then(text_value) else {
                continue;
            };

            let image_urls: Vec<String> = item
                .get(&self.config.images_key)
                .and_then(Value::as_array)
                .map(|images| {
                    images
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            let image = image_urls.first().cloned().unwrap_or_default();

            let id = self
                .config
                .id_key
                .as_deref()
                .and_then(|key| item.get(key))
                .and_then(text_value)
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            let description = self
                .config
                .description_key
                .as_deref()
                .and_then(|key| item.get(key))
                .and_then(text_value)
                .unwrap_or_else(|| Product::fallback_description(&self.config.store));

            let category = self
                .config
                .category_key
                .as_deref()
                .and_then(|key| item.get(key))
                .and_then(text_value)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

            products.push(Product {
                id,
                title,
                price,
                store: self.config.store.clone(),
                description,
                image,
                image_urls,
                category,
            });
        }

        Ok(products)
    }
}

#[async_trait]
impl Source for ApiSource {
    async fn collect(&self) -> ScrapeResult<Vec<Product>> {
        let payload = self.fetcher.get_json(&self.config.url).await?;
        self.extract(&payload)
    }

    fn name(&self) -> &str {
        &self.config.store
    }
}

/// Usable text of a JSON value: non-empty strings as-is, numbers
/// stringified, everything else `None`.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_source() -> ApiSource {
        ApiSource::new(
            ApiConfig::new(
                "TestShop",
                "https://api.example/products",
                "name",
                "price",
                "images",
            )
            .with_description_key("description")
            .with_category_key("category"),
            HttpFetcher::new(),
        )
    }

    #[test]
    fn test_full_item_maps_all_fields() {
        let source = catalog_source();
        let payload = json!([{
            "name": "Phone A",
            "price": "199€",
            "images": ["https://cdn.example/a.jpg", "https://cdn.example/a2.jpg"],
            "description": "Flagship.",
            "category": "Smartphones"
        }]);

        let products = source.extract(&payload).unwrap();

        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert_eq!(product.title, "Phone A");
        assert_eq!(product.price, "199€");
        assert_eq!(product.image, "https://cdn.example/a.jpg");
        assert_eq!(product.image_urls.len(), 2);
        assert_eq!(product.description, "Flagship.");
        assert_eq!(product.category, "Smartphones");
        assert_eq!(product.store, "TestShop");
    }

    #[test]
    fn test_items_missing_required_keys_are_skipped() {
        let source = catalog_source();
        let payload = json!([
            { "name": "No price" },
            { "price": "199€" },
            { "name": "Phone A", "price": "199€" }
        ]);

        let products = source.extract(&payload).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Phone A");
    }

    #[test]
    fn test_absent_optional_fields_get_defaults() {
        let source = catalog_source();
        let payload = json!([{ "name": "Phone A", "price": "199€" }]);

        let products = source.extract(&payload).unwrap();

        let product = &products[0];
        assert_eq!(product.image, "");
        assert!(product.image_urls.is_empty());
        assert_eq!(
            product.description,
            Product::fallback_description("TestShop")
        );
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert!(!product.id.is_empty());
    }

    #[test]
    fn test_numeric_price_is_stringified() {
        let source = catalog_source();
        let payload = json!([{ "name": "Phone A", "price": 199 }]);

        let products = source.extract(&payload).unwrap();

        assert_eq!(products[0].price, "199");
    }

    #[test]
    fn test_native_id_key_is_honored() {
        let source = ApiSource::new(
            ApiConfig::new(
                "TestShop",
                "https://api.example/products",
                "name",
                "price",
                "images",
            )
            .with_id_key("sku"),
            HttpFetcher::new(),
        );
        let payload = json!([{ "sku": "abc-1", "name": "Phone A", "price": "199€" }]);

        let products = source.extract(&payload).unwrap();

        assert_eq!(products[0].id, "abc-1");
    }

    #[test]
    fn test_items_under_a_key() {
        let source = ApiSource::new(
            ApiConfig::new(
                "TestShop",
                "https://api.example/products",
                "name",
                "price",
                "images",
            )
            .with_items_key("products"),
            HttpFetcher::new(),
        );
        let payload = json!({ "products": [{ "name": "Phone A", "price": "199€" }] });

        let products = source.extract(&payload).unwrap();

        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_non_array_payload_is_a_parse_error() {
        let source = catalog_source();
        let payload = json!({ "error": "not found" });

        let result = source.extract(&payload);

        assert!(matches!(result, Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn test_empty_array_is_empty_result() {
        let source = catalog_source();
        let products = source.extract(&json!([])).unwrap();
        assert!(products.is_empty());
    }
}
