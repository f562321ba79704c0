use futures::future::try_join_all;
use tracing::{debug, instrument};

use super::store::SeedStore;
use crate::error::Result;

/// Adds every product to every consumer's product collection.
///
/// Issues one append per (product, consumer) pair, all in flight at once, so
/// no product ends up without a consumer and no consumer without products.
/// Returns the number of links written.
#[instrument(skip(store, products, consumers), fields(products = products.len(), consumers = consumers.len()))]
pub async fn link_products_to_consumers<S: SeedStore + ?Sized>(
    store: &S,
    products: &[i32],
    consumers: &[i32],
) -> Result<usize> {
    let appends = products.iter().flat_map(|&product| {
        consumers
            .iter()
            .map(move |&consumer| store.append_consumer_product(consumer, product))
    });

    let linked = try_join_all(appends).await?.len();
    debug!(linked, "Linked products to consumers");
    Ok(linked)
}
