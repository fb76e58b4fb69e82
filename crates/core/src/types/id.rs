//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Order Gate IDs are
//! opaque, caller-supplied strings (e.g. `PIPR-JACKET-SIZM`), so the wrappers
//! hold a `String` and never validate the contents.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`, `Default`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`, `is_empty()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use order_gate_core::define_id;
/// define_id!(WarehouseId);
/// define_id!(ParcelId);
///
/// let warehouse_id = WarehouseId::new("PAR-01");
/// let parcel_id = ParcelId::new("PAR-01");
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseId = parcel_id;
/// assert_eq!(warehouse_id.as_str(), parcel_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the ID is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(OrderId);
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_string() {
        let id = ProductId::new("PIPR-JACKET-SIZM");
        assert_eq!(id.to_string(), "PIPR-JACKET-SIZM");
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::from("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ordering_follows_string_order() {
        let mut ids = vec![OrderId::new("b"), OrderId::new("a"), OrderId::new("c")];
        ids.sort();
        let raw: Vec<&str> = ids.iter().map(OrderId::as_str).collect();
        assert_eq!(raw, ["a", "b", "c"]);
    }

    #[test]
    fn test_borrow_allows_str_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(ProductId::new("PIPR-MOSPAD-0000"), 1);
        assert_eq!(map.get("PIPR-MOSPAD-0000"), Some(&1));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(OrderId::default().is_empty());
        assert!(!OrderId::new("1").is_empty());
    }
}
