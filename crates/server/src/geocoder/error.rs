//! Geocoding errors.

use thiserror::Error;

/// Errors that can occur when resolving an address.
///
/// [`GeocoderError::NotFound`] is the normal outcome for an unresolvable
/// address; every other variant is a transport failure.
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// HTTP request could not be sent or completed.
    #[error("geocoder request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("geocoder returned status {0}")]
    Status(u16),

    /// The response body was not a feature collection.
    #[error("geocoder response error: {0}")]
    Response(String),

    /// The service returned no candidates.
    #[error("address not found")]
    NotFound,
}

impl GeocoderError {
    /// Whether this is a transport failure rather than a clean "no match".
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}
