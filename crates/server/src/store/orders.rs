//! Accepted order storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use order_gate_core::{Order, OrderId};
use tokio::sync::RwLock;

/// Shared map of accepted orders.
///
/// Writes are last-write-wins keyed by order id: there is no version check,
/// so concurrent creations for the same id resolve to whichever upsert lands
/// last. Listing is ordered by id.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<BTreeMap<OrderId, Order>>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an order, returning the order it replaced.
    pub async fn upsert(&self, order: Order) -> Option<Order> {
        self.inner.write().await.insert(order.id.clone(), order)
    }

    /// All orders, ordered by id.
    pub async fn list(&self) -> Vec<Order> {
        self.inner.read().await.values().cloned().collect()
    }

    /// Fetch one order by id.
    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.inner.read().await.get(id).cloned()
    }

    /// Number of stored orders.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether no order has been stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
