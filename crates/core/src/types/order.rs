//! Orders as submitted by callers.
//!
//! An [`Order`] arrives as a candidate: nothing about it has been checked.
//! Missing string fields decode as empty so that incomplete orders reach the
//! validation pipeline and are rejected there with a specific reason, rather
//! than failing at the JSON layer.

use serde::{Deserialize, Serialize};

use super::address::ResolvedAddress;
use super::country::Country;
use super::id::{OrderId, ProductId};

/// A customer placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    /// Whether both names are present.
    ///
    /// Only raw emptiness counts; whitespace is not trimmed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

/// Where an order ships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    /// Free-text street address (number and street name).
    pub street_address: String,
    pub postal_code: String,
    pub city: String,
    /// Free-text country; canonicalized to `France` during validation.
    pub country: String,
}

impl ShippingAddress {
    /// Whether street, postal code and city are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.street_address.is_empty() && !self.postal_code.is_empty() && !self.city.is_empty()
    }

    /// Overwrite the free-text fields with a geocoder result.
    pub fn apply(&mut self, resolved: ResolvedAddress) {
        self.street_address = resolved.label;
        self.postal_code = resolved.postal_code;
        self.city = resolved.city;
    }

    /// Replace the country with its canonical name.
    pub fn set_country(&mut self, country: Country) {
        self.country = country.as_str().to_owned();
    }
}

/// One product and the quantity ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// An order, either candidate (just received) or accepted (stored).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Caller-supplied identifier; not checked for uniqueness.
    pub id: OrderId,
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub line_items: Vec<LineItem>,
}

/// Empty response returned once an order has been accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            street_address: "20 avenue de Ségur".to_string(),
            postal_code: "75007".to_string(),
            city: "Paris".to_string(),
            country: "fr".to_string(),
        }
    }

    #[test]
    fn test_customer_completeness_is_raw() {
        let complete = Customer {
            first_name: "Joe".to_string(),
            last_name: "John".to_string(),
        };
        assert!(complete.is_complete());

        let missing_first = Customer {
            first_name: String::new(),
            last_name: "John".to_string(),
        };
        assert!(!missing_first.is_complete());

        // Whitespace is not trimmed
        let blank = Customer {
            first_name: " ".to_string(),
            last_name: " ".to_string(),
        };
        assert!(blank.is_complete());
    }

    #[test]
    fn test_address_completeness() {
        assert!(address().is_complete());

        let mut no_city = address();
        no_city.city.clear();
        assert!(!no_city.is_complete());

        let mut no_postal_code = address();
        no_postal_code.postal_code.clear();
        assert!(!no_postal_code.is_complete());

        let mut no_street = address();
        no_street.street_address.clear();
        assert!(!no_street.is_complete());
    }

    #[test]
    fn test_apply_overwrites_free_text() {
        let mut addr = address();
        addr.apply(ResolvedAddress {
            label: "20 Avenue de Segur".to_string(),
            postal_code: "75007".to_string(),
            city: "Paris".to_string(),
        });
        assert_eq!(addr.street_address, "20 Avenue de Segur");
        assert_eq!(addr.postal_code, "75007");
        assert_eq!(addr.city, "Paris");
        assert_eq!(addr.country, "fr");

        addr.set_country(Country::France);
        assert_eq!(addr.country, "France");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let order: Order = serde_json::from_str(
            r#"{"id":"2","customer":{"last_name":"John"},"line_items":[{"product_id":"PIPR-JACKET-SIZM","quantity":5}]}"#,
        )
        .unwrap();
        assert_eq!(order.id.as_str(), "2");
        assert!(order.customer.first_name.is_empty());
        assert_eq!(order.shipping_address, ShippingAddress::default());
        assert_eq!(order.line_items, vec![LineItem::new("PIPR-JACKET-SIZM", 5)]);
    }

    #[test]
    fn test_negative_quantity_is_rejected_by_decoder() {
        let result: Result<LineItem, _> =
            serde_json::from_str(r#"{"product_id":"PIPR-JACKET-SIZM","quantity":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_acknowledgement_is_empty_object() {
        assert_eq!(serde_json::to_string(&Acknowledgement {}).unwrap(), "{}");
    }
}
