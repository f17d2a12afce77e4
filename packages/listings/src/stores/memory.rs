//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::ProductStore;
use crate::types::Product;

/// In-memory product store.
///
/// Useful for tests and development. Not suitable for production as
/// data is lost on restart.
pub struct MemoryStore {
    products: RwLock<HashMap<String, Product>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of stored products.
    pub fn product_count(&self) -> usize {
        self.products.read().unwrap().len()
    }

    /// Get a stored product by id.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }

    /// All stored products, in no particular order.
    pub fn products(&self) -> Vec<Product> {
        self.products.read().unwrap().values().cloned().collect()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.products.write().unwrap().clear();
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn upsert(&self, product: &Product) -> StoreResult<()> {
        self.products
            .write()
            .unwrap()
            .insert(product.id.clone(), product.clone());
        Ok(())
    }
}
