//! Order creation: validation pipeline and acceptance.
//!
//! A candidate order passes through these stages, in order, stopping at the
//! first failure:
//!
//! 1. Customer - first and last name must be non-empty
//! 2. Products - every line item must reference a catalog product
//! 3. Address
//!    a. Country - empty, `france` or `fr` (any case) become `France`;
//!       anything else is rejected before any network call
//!    b. Completeness - street, postal code and city must be non-empty
//!    c. Resolution - the geocoder's best match replaces street, postal code
//!       and city
//!
//! Only an order that clears every stage is written to the order store, so a
//! rejected order never leaves a trace.

use order_gate_core::{Acknowledgement, Country, Order, ProductId, ShippingAddress};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::geocoder::{AddressResolver, GeocoderError};
use crate::store::{OrderStore, ProductCatalog, ProductStore};

/// Reasons an order is rejected.
#[derive(Debug, Error)]
pub enum OrderError {
    /// First or last name is missing.
    #[error("customer name not completed")]
    IncompleteCustomer,

    /// A line item references a product that is not in the catalog.
    #[error("product ({0}) not found")]
    ProductNotFound(ProductId),

    /// The destination is outside the single supported country.
    #[error("send in France only")]
    UnsupportedCountry(String),

    /// Street, city or postal code is missing.
    #[error("address not complete")]
    IncompleteAddress,

    /// The geocoder found no candidate for the address.
    #[error("address not found")]
    AddressNotFound,

    /// The geocoder could not be queried.
    #[error("address lookup failed: {0}")]
    AddressLookup(#[source] GeocoderError),
}

impl From<GeocoderError> for OrderError {
    fn from(err: GeocoderError) -> Self {
        match err {
            GeocoderError::NotFound => Self::AddressNotFound,
            other => Self::AddressLookup(other),
        }
    }
}

/// Runs the validation stages against a candidate order.
#[derive(Debug)]
pub struct OrderValidator<'a, C> {
    catalog: &'a C,
    resolver: &'a AddressResolver,
}

impl<'a, C: ProductCatalog> OrderValidator<'a, C> {
    #[must_use]
    pub const fn new(catalog: &'a C, resolver: &'a AddressResolver) -> Self {
        Self { catalog, resolver }
    }

    /// Validate an order and return it with its address canonicalized.
    ///
    /// # Errors
    ///
    /// Returns the [`OrderError`] of the first stage that fails.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn validate_and_prepare(&self, mut order: Order) -> Result<Order, OrderError> {
        check_customer(&order)?;
        debug!("Customer check passed");

        self.check_products(&order).await?;
        debug!(line_items = order.line_items.len(), "Product check passed");

        self.verify_address(&mut order.shipping_address).await?;
        debug!("Address verified");

        Ok(order)
    }

    /// Sequential first-failure scan over line items.
    async fn check_products(&self, order: &Order) -> Result<(), OrderError> {
        for item in &order.line_items {
            match self.catalog.product(&item.product_id).await {
                Ok(Some(_)) => {}
                Ok(None) => return Err(OrderError::ProductNotFound(item.product_id.clone())),
                Err(e) => {
                    warn!(product_id = %item.product_id, error = %e, "Product lookup failed");
                    return Err(OrderError::ProductNotFound(item.product_id.clone()));
                }
            }
        }
        Ok(())
    }

    async fn verify_address(&self, address: &mut ShippingAddress) -> Result<(), OrderError> {
        let country = Country::normalize(&address.country)
            .map_err(|_| OrderError::UnsupportedCountry(address.country.clone()))?;
        address.set_country(country);

        if !address.is_complete() {
            return Err(OrderError::IncompleteAddress);
        }

        let resolved = self
            .resolver
            .resolve(&address.street_address, &address.city, &address.postal_code)
            .await?;

        debug!(
            street_address = %resolved.label,
            postal_code = %resolved.postal_code,
            city = %resolved.city,
            "Address resolved by geocoder"
        );
        address.apply(resolved);

        Ok(())
    }
}

fn check_customer(order: &Order) -> Result<(), OrderError> {
    if order.customer.is_complete() {
        Ok(())
    } else {
        Err(OrderError::IncompleteCustomer)
    }
}

/// Creates and lists orders.
///
/// Cheap to clone; clones share the same stores.
#[derive(Debug, Clone)]
pub struct OrderService<C = ProductStore> {
    orders: OrderStore,
    catalog: C,
    resolver: AddressResolver,
}

impl<C: ProductCatalog> OrderService<C> {
    #[must_use]
    pub const fn new(orders: OrderStore, catalog: C, resolver: AddressResolver) -> Self {
        Self {
            orders,
            catalog,
            resolver,
        }
    }

    /// The product catalog orders are checked against.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The accepted order store.
    #[must_use]
    pub const fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Validate an order and, if it passes, store it.
    ///
    /// # Errors
    ///
    /// Returns the [`OrderError`] of the first failing validation stage. The
    /// order store is untouched on error.
    pub async fn create_order(&self, order: Order) -> Result<Acknowledgement, OrderError> {
        let order_id = order.id.clone();
        let validator = OrderValidator::new(&self.catalog, &self.resolver);

        match validator.validate_and_prepare(order).await {
            Ok(order) => Ok(self.accept(order).await),
            Err(err) => {
                if matches!(err, OrderError::AddressLookup(_)) {
                    warn!(order_id = %order_id, error = %err, "Order rejected");
                } else {
                    info!(order_id = %order_id, reason = %err, "Order rejected");
                }
                Err(err)
            }
        }
    }

    /// Upsert a validated order, replacing any order with the same id.
    pub async fn accept(&self, order: Order) -> Acknowledgement {
        let order_id = order.id.clone();
        let replaced = self.orders.upsert(order).await;
        info!(order_id = %order_id, replaced = replaced.is_some(), "Order accepted");
        Acknowledgement {}
    }

    /// Every accepted order.
    pub async fn list_orders(&self) -> Vec<Order> {
        self.orders.list().await
    }
}
