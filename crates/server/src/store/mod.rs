//! In-memory repositories for orders and products.
//!
//! Both stores are cheap to clone and safe to share between request handlers.
//! They expose only keyed reads, listing and (for orders) upsert.
//!
//! - [`OrderStore`] - accepted orders keyed by id, last write wins
//! - [`ProductStore`] - the immutable product catalog
//! - [`ProductCatalog`] - the lookup seam the order pipeline depends on

mod orders;
mod products;

use std::future::Future;

use order_gate_core::{Product, ProductId};
use thiserror::Error;

pub use orders::OrderStore;
pub use products::{CatalogError, ProductStore};

/// Errors surfaced by repository lookups.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing collaborator could not answer.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Product existence lookups used while validating orders.
pub trait ProductCatalog: Send + Sync {
    /// Fetch a product by id, `Ok(None)` when it does not exist.
    fn product(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Option<Product>, RepositoryError>> + Send;
}
