//! Test doubles for the pipeline seams.
//!
//! Useful for exercising the aggregator and sink without network or a
//! database.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{ScrapeError, ScrapeResult, StoreError, StoreResult};
use crate::traits::{ProductStore, Source};
use crate::types::{Product, DEFAULT_CATEGORY};

/// Build a minimal valid product for fixtures.
pub fn product(id: &str, title: &str, price: &str, store: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price: price.to_string(),
        store: store.to_string(),
        description: Product::fallback_description(store),
        image: String::new(),
        image_urls: Vec::new(),
        category: DEFAULT_CATEGORY.to_string(),
    }
}

/// A source that returns a fixed set of records.
pub struct StaticSource {
    name: String,
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }
}

#[async_trait]
impl Source for StaticSource {
    async fn collect(&self) -> ScrapeResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A source that always fails with a parse error.
pub struct FailingSource {
    name: String,
}

impl FailingSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Source for FailingSource {
    async fn collect(&self) -> ScrapeResult<Vec<Product>> {
        Err(ScrapeError::Parse {
            url: format!("test://{}", self.name),
            reason: "simulated source failure".to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An in-memory store that records every upsert call and can be told to
/// reject specific ids.
#[derive(Default)]
pub struct RecordingStore {
    products: RwLock<HashMap<String, Product>>,
    upserts: RwLock<Vec<String>>,
    rejected: HashSet<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject upserts for this id with [`StoreError::Rejected`].
    pub fn with_rejected(mut self, id: impl Into<String>) -> Self {
        self.rejected.insert(id.into());
        self
    }

    /// Ids passed to `upsert`, in call order, including rejected ones.
    pub fn upserted_ids(&self) -> Vec<String> {
        self.upserts.read().unwrap().clone()
    }

    /// Total number of `upsert` calls made.
    pub fn upsert_calls(&self) -> usize {
        self.upserts.read().unwrap().len()
    }

    /// Number of records actually held.
    pub fn product_count(&self) -> usize {
        self.products.read().unwrap().len()
    }

    /// Get a stored record by id.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn upsert(&self, product: &Product) -> StoreResult<()> {
        self.upserts.write().unwrap().push(product.id.clone());

        if self.rejected.contains(&product.id) {
            return Err(StoreError::Rejected {
                reason: format!("id {} is configured to fail", product.id),
            });
        }

        self.products
            .write()
            .unwrap()
            .insert(product.id.clone(), product.clone());
        Ok(())
    }
}
