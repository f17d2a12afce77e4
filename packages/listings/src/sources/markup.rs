//! Markup extractor template for HTML-based retailers.
//!
//! Every HTML retailer is the same shape: a listing page with repeated
//! item blocks, each holding a title, a price, and usually an image.
//! This module implements that shape once; a retailer is just a
//! [`MarkupConfig`] of CSS selectors fed into [`MarkupSource`].

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use url::Url;
use uuid::Uuid;

use crate::error::{ScrapeError, ScrapeResult};
use crate::fetch::HttpFetcher;
use crate::traits::Source;
use crate::types::{Product, DEFAULT_CATEGORY};

/// Selector configuration for one HTML retailer.
#[derive(Debug, Clone)]
pub struct MarkupConfig {
    /// Store name stamped on every extracted record
    pub store: String,

    /// Listing page URL
    pub url: String,

    /// Selector for the repeated item blocks
    pub item_selector: String,

    /// Selector for the title inside an item block
    pub title_selector: String,

    /// Selector for the price inside an item block
    pub price_selector: String,

    /// Selector for the image inside an item block
    pub image_selector: String,

    /// Selector for a per-item description, when the retailer has one
    pub description_selector: Option<String>,

    /// Attribute on the item block holding the retailer's own product
    /// id (e.g. `data-product-id`). Items without it get a generated id.
    pub id_attribute: Option<String>,
}

impl MarkupConfig {
    /// Create a config with the required selectors; image defaults to
    /// the first `img` in the block.
    pub fn new(
        store: impl Into<String>,
        url: impl Into<String>,
        item_selector: impl Into<String>,
        title_selector: impl Into<String>,
        price_selector: impl Into<String>,
    ) -> Self {
        Self {
            store: store.into(),
            url: url.into(),
            item_selector: item_selector.into(),
            title_selector: title_selector.into(),
            price_selector: price_selector.into(),
            image_selector: "img".to_string(),
            description_selector: None,
            id_attribute: None,
        }
    }

    /// Override the image selector.
    pub fn with_image_selector(mut self, selector: impl Into<String>) -> Self {
        self.image_selector = selector.into();
        self
    }

    /// Set a description selector.
    pub fn with_description_selector(mut self, selector: impl Into<String>) -> Self {
        self.description_selector = Some(selector.into());
        self
    }

    /// Read the native product id from this attribute of the item block.
    pub fn with_id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.id_attribute = Some(attribute.into());
        self
    }
}

/// HTML listing source driven by a [`MarkupConfig`].
pub struct MarkupSource {
    store: String,
    url: String,
    base: Option<Url>,
    fetcher: HttpFetcher,
    item: Selector,
    title: Selector,
    price: Selector,
    image: Selector,
    description: Option<Selector>,
    id_attribute: Option<String>,
}

impl MarkupSource {
    /// Compile the config's selectors. An unparseable selector is a
    /// configuration bug and fails construction.
    pub fn new(config: MarkupConfig, fetcher: HttpFetcher) -> ScrapeResult<Self> {
        Ok(Self {
            base: Url::parse(&config.url).ok(),
            item: compile(&config.item_selector)?,
            title: compile(&config.title_selector)?,
            price: compile(&config.price_selector)?,
            image: compile(&config.image_selector)?,
            description: match &config.description_selector {
                Some(selector) => Some(compile(selector)?),
                None => None,
            },
            id_attribute: config.id_attribute,
            store: config.store,
            url: config.url,
            fetcher,
        })
    }

    /// Extract all products from a listing page body, in document order.
    ///
    /// Items missing a title or price are skipped. Zero item blocks is
    /// an empty result, not an error.
    fn extract(&self, body: &str) -> Vec<Product> {
        let document = Html::parse_document(body);
        let mut products = Vec::new();

        for item in document.select(&self.item) {
            let Some(title) = select_text(item, &self.title) else {
                continue;
            };
            let Some(price) = select_text(item, &self.price) else {
                continue;
            };

            let image = item
                .select(&self.image)
                .next()
                .and_then(|el| el.value().attr("src"))
                .map(|src| self.resolve(src))
                .unwrap_or_default();

            let id = self
                .id_attribute
                .as_deref()
                .and_then(|attr| item.value().attr(attr))
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            let description = self
                .description
                .as_ref()
                .and_then(|selector| select_text(item, selector))
                .unwrap_or_else(|| Product::fallback_description(&self.store));

            let image_urls = if image.is_empty() {
                Vec::new()
            } else {
                vec![image.clone()]
            };

            products.push(Product {
                id,
                title,
                price,
                store: self.store.clone(),
                description,
                image,
                image_urls,
                category: DEFAULT_CATEGORY.to_string(),
            });
        }

        products
    }

    /// Resolve a possibly-relative image reference against the page URL.
    fn resolve(&self, src: &str) -> String {
        match &self.base {
            Some(base) => base
                .join(src)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| src.to_string()),
            None => src.to_string(),
        }
    }
}

#[async_trait]
impl Source for MarkupSource {
    async fn collect(&self) -> ScrapeResult<Vec<Product>> {
        let body = self.fetcher.get_text(&self.url).await?;
        Ok(self.extract(&body))
    }

    fn name(&self) -> &str {
        &self.store
    }
}

fn compile(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|_| ScrapeError::Selector {
        selector: selector.to_string(),
    })
}

/// Trimmed text of the first descendant matching `selector`; `None`
/// when nothing matches or the match is empty.
fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_source(config: MarkupConfig) -> MarkupSource {
        MarkupSource::new(config, HttpFetcher::new()).unwrap()
    }

    fn shop_config() -> MarkupConfig {
        MarkupConfig::new(
            "TestShop",
            "https://shop.example/phones",
            ".product-card",
            ".product-title",
            ".product-price",
        )
    }

    #[test]
    fn test_incomplete_items_are_skipped() {
        let source = test_source(shop_config());
        let body = r#"
            <div class="product-card">
                <span class="product-title">Phone A</span>
                <span class="product-price">199€</span>
                <img src="a.jpg">
            </div>
            <div class="product-card">
                <span class="product-title">Phone B</span>
            </div>
        "#;

        let products = source.extract(body);

        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert_eq!(product.title, "Phone A");
        assert_eq!(product.price, "199€");
        assert_eq!(product.store, "TestShop");
        assert_eq!(product.image, "https://shop.example/a.jpg");
        assert_eq!(
            product.description,
            Product::fallback_description("TestShop")
        );
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let source = test_source(shop_config());
        let body = r#"
            <div class="product-card">
                <span class="product-title">Phone A</span>
                <span class="product-price">199€</span>
            </div>
        "#;

        let products = source.extract(body);

        assert_eq!(products[0].image, "");
        assert!(products[0].image_urls.is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let source = test_source(shop_config());
        let body = r#"
            <div class="product-card">
                <span class="product-title">Phone A</span>
                <span class="product-price">199€</span>
            </div>
            <div class="product-card">
                <span class="product-title">Phone B</span>
                <span class="product-price">299€</span>
            </div>
        "#;

        let products = source.extract(body);

        assert_eq!(products.len(), 2);
        assert!(!products[0].id.is_empty());
        assert!(!products[1].id.is_empty());
        assert_ne!(products[0].id, products[1].id);
    }

    #[test]
    fn test_native_id_attribute_is_honored() {
        let source = test_source(shop_config().with_id_attribute("data-product-id"));
        let body = r#"
            <div class="product-card" data-product-id="sku-123">
                <span class="product-title">Phone A</span>
                <span class="product-price">199€</span>
            </div>
        "#;

        let products = source.extract(body);

        assert_eq!(products[0].id, "sku-123");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let source = test_source(shop_config());
        let body = r#"
            <div class="product-card">
                <span class="product-title">First</span>
                <span class="product-price">1€</span>
            </div>
            <div class="product-card">
                <span class="product-title">Second</span>
                <span class="product-price">2€</span>
            </div>
            <div class="product-card">
                <span class="product-title">Third</span>
                <span class="product-price">3€</span>
            </div>
        "#;

        let titles: Vec<_> = source
            .extract(body)
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_description_selector_with_fallback() {
        let source = test_source(shop_config().with_description_selector(".product-blurb"));
        let body = r#"
            <div class="product-card">
                <span class="product-title">Phone A</span>
                <span class="product-price">199€</span>
                <p class="product-blurb">Great phone.</p>
            </div>
            <div class="product-card">
                <span class="product-title">Phone B</span>
                <span class="product-price">299€</span>
            </div>
        "#;

        let products = source.extract(body);

        assert_eq!(products[0].description, "Great phone.");
        assert_eq!(
            products[1].description,
            Product::fallback_description("TestShop")
        );
    }

    #[test]
    fn test_page_without_item_blocks_is_empty_not_an_error() {
        let source = test_source(shop_config());
        let products = source.extract("<html><body><p>maintenance</p></body></html>");
        assert!(products.is_empty());
    }

    #[test]
    fn test_invalid_selector_fails_construction() {
        let config = MarkupConfig::new("X", "https://x.example", "[[[", ".t", ".p");
        let result = MarkupSource::new(config, HttpFetcher::new());
        assert!(matches!(result, Err(ScrapeError::Selector { .. })));
    }
}
