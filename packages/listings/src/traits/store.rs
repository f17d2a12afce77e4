//! Storage trait for persisted product records.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::Product;

/// Key-value style product storage.
///
/// The single operation is an idempotent create-or-replace keyed by
/// `product.id`. There are no transactional guarantees across calls;
/// the sink treats every record independently.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert the record, replacing any existing record with the same id.
    async fn upsert(&self, product: &Product) -> StoreResult<()>;
}
