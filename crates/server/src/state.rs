//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::geocoder::{AddressResolver, GeocoderError};
use crate::services::OrderService;
use crate::store::{OrderStore, ProductStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// order service and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    orders: OrderService,
}

impl AppState {
    /// Create a new application state with an empty order store.
    ///
    /// # Errors
    ///
    /// Returns an error if the geocoder URL in `config` is unusable.
    pub fn new(config: ServerConfig, products: ProductStore) -> Result<Self, GeocoderError> {
        let resolver = AddressResolver::new(&config.geocoder)?;
        let orders = OrderService::new(OrderStore::new(), products, resolver);

        Ok(Self {
            inner: Arc::new(AppStateInner { config, orders }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        self.inner.orders.catalog()
    }
}
