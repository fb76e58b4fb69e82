//! Addresses returned by the geocoding service.

use serde::{Deserialize, Serialize};

/// Canonical address triple returned by the geocoding lookup.
///
/// Once substituted into an order these values are authoritative; the
/// caller's original free text is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    /// Canonical street label (e.g. `20 Avenue de Segur`).
    pub label: String,
    /// Canonical postal code.
    pub postal_code: String,
    /// Canonical city name.
    pub city: String,
}
