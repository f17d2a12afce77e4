//! Persistence sink: best-effort, independent per-record upserts.

use tracing::{info, warn};

use crate::traits::ProductStore;
use crate::types::Product;

/// Outcome counts of one persistence pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PersistSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Upsert every record, one at a time, in aggregation order.
///
/// A record that the store refuses is logged with its title and id and
/// skipped; later records are still attempted. There is no atomicity
/// across records and no retry.
pub async fn persist_all(store: &dyn ProductStore, products: &[Product]) -> PersistSummary {
    let mut summary = PersistSummary::default();

    for product in products {
        match store.upsert(product).await {
            Ok(()) => {
                info!(title = %product.title, id = %product.id, "saved product");
                summary.saved += 1;
            }
            Err(e) => {
                warn!(
                    title = %product.title,
                    id = %product.id,
                    error = %e,
                    "failed to save product"
                );
                summary.failed += 1;
            }
        }
    }

    info!(
        saved = summary.saved,
        failed = summary.failed,
        "upload complete"
    );
    summary
}
