//! Address geocoding HTTP client.
//!
//! One lookup is one `GET` request. There is no retry and no timeout beyond
//! the HTTP client defaults: a hanging service stalls only the request that
//! triggered the lookup.

use order_gate_core::ResolvedAddress;
use order_gate_core::text::strip_diacritics;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::GeocoderError;
use super::types::FeatureCollection;
use crate::config::GeocoderConfig;

/// Search endpoint path, relative to the service base URL.
const SEARCH_PATH: &str = "search/";

/// Resolves free-text addresses to canonical ones.
///
/// The service's own ranking is trusted: the first candidate wins, with no
/// similarity check against the caller's input.
#[derive(Debug, Clone)]
pub struct AddressResolver {
    /// HTTP client.
    client: Client,
    /// Fully-qualified search endpoint.
    search_url: Url,
}

impl AddressResolver {
    /// Create a resolver for the configured geocoding service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Request`] if the search URL cannot be derived
    /// from the base URL (e.g. a `data:` URL).
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocoderError> {
        Ok(Self {
            client: Client::new(),
            search_url: search_url(&config.base_url)?,
        })
    }

    /// The endpoint lookups are sent to.
    #[must_use]
    pub const fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Resolve an address to the service's best match.
    ///
    /// Street and city are stripped of diacritics before being sent; the
    /// postal code is sent as-is.
    ///
    /// # Errors
    ///
    /// - [`GeocoderError::NotFound`] if the service returned no candidates
    /// - [`GeocoderError::Request`], [`GeocoderError::Status`] or
    ///   [`GeocoderError::Response`] if the lookup itself failed
    #[instrument(skip(self, street_address, city))]
    pub async fn resolve(
        &self,
        street_address: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<ResolvedAddress, GeocoderError> {
        let query = strip_diacritics(street_address);
        let city = strip_diacritics(city);

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("q", query.as_str()),
                ("city", city.as_str()),
                ("postcode", postal_code),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Geocoder request failed");
                GeocoderError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Geocoder returned an error status");
            return Err(GeocoderError::Status(status.as_u16()));
        }

        let collection: FeatureCollection = response.json().await.map_err(|e| {
            warn!(error = %e, "Geocoder response could not be decoded");
            GeocoderError::Response(e.to_string())
        })?;

        let Some(best) = collection.best() else {
            debug!(query = %query, city = %city, "Geocoder returned no candidates");
            return Err(GeocoderError::NotFound);
        };

        debug!(
            candidates = collection.features.len(),
            score = ?best.properties.score,
            label = ?best.properties.label,
            "Address resolved"
        );

        best.properties.resolved().ok_or_else(|| {
            warn!("Best geocoder candidate lacks name, postcode or city");
            GeocoderError::Response("best candidate lacks name, postcode or city".to_string())
        })
    }
}

/// Derive the search endpoint from a base URL, keeping any base path.
fn search_url(base_url: &Url) -> Result<Url, GeocoderError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(SEARCH_PATH)
        .map_err(|e| GeocoderError::Request(format!("invalid geocoder URL: {e}")))
}
