//! Run all sources and merge their output, isolating per-source failure.

use tracing::{info, warn};

use crate::traits::Source;
use crate::types::Product;

/// Invoke every source exactly once, in list order, and concatenate the
/// successful results.
///
/// A failing source is logged and contributes nothing; it never aborts
/// the run. The returned sequence preserves list order across sources
/// and document order within each source.
pub async fn collect_all(sources: &[Box<dyn Source>]) -> Vec<Product> {
    let mut all = Vec::new();

    for source in sources {
        info!(source = source.name(), "collecting listings");

        match source.collect().await {
            Ok(products) => {
                info!(
                    source = source.name(),
                    count = products.len(),
                    "source returned listings"
                );
                all.extend(products);
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "source failed, skipping");
            }
        }
    }

    info!(total = all.len(), "aggregation complete");
    all
}
