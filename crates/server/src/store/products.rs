//! Product catalog storage.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use order_gate_core::{Price, Product, ProductId};
use thiserror::Error;

use super::{ProductCatalog, RepositoryError};

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of products.
    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two products share an id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// Read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<HashMap<ProductId, Product>>,
}

impl ProductStore {
    /// Build a store from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut map = HashMap::with_capacity(products.len());
        for product in products {
            let id = product.id.clone();
            if map.insert(id.clone(), product).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        Ok(Self {
            products: Arc::new(map),
        })
    }

    /// The catalog shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        let products: HashMap<ProductId, Product> = [
            ("PIPR-JACKET-SIZM", "Pipr jacket, size M", 8900),
            ("PIPR-JACKET-SIZL", "Pipr jacket, size L", 8900),
            ("PIPR-JOGCAS-SIZM", "Pipr jogging cap, size M", 2450),
            ("PIPR-JOGCAS-SIZL", "Pipr jogging cap, size L", 2450),
            ("PIPR-MOSPAD-0000", "Pipr mouse pad", 1290),
            ("PIPR-SMAWAT-0000", "Pipr smart watch", 14900),
            ("PIPR-SHOBAG-0000", "Pipr shopping bag", 590),
        ]
        .into_iter()
        .map(|(id, name, cents)| (ProductId::new(id), Product::new(id, name, Price::eur_cents(cents))))
        .collect();

        Self {
            products: Arc::new(products),
        }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or
    /// contains duplicate ids.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: display,
                source,
            })?;

        Self::from_products(products)
    }

    /// Fetch one product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products, ordered by id.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for ProductStore {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_contains_reference_products() {
        let store = ProductStore::builtin();
        for id in ["PIPR-JACKET-SIZM", "PIPR-MOSPAD-0000", "PIPR-JOGCAS-SIZL"] {
            assert!(store.get(id).is_some(), "{id}");
        }
        assert!(store.get("PIPR-JACKET").is_none());
        assert!(store.get("UNKNOWN").is_none());
    }

    #[test]
    fn test_list_is_sorted() {
        let ids: Vec<String> = ProductStore::builtin()
            .list()
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let products = vec![
            Product::new("A", "first", Price::eur_cents(100)),
            Product::new("A", "second", Price::eur_cents(200)),
        ];
        assert!(matches!(
            ProductStore::from_products(products),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "A"
        ));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("order-gate-catalog-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"[{"id": "TEST-0001", "name": "Test product", "price": {"amount": "9.99", "currency_code": "EUR"}}]"#,
        )
        .unwrap();
        drop(file);

        let store = ProductStore::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("TEST-0001").unwrap().price, Price::eur_cents(999));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ProductStore::from_json_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_catalog_lookup() {
        let store = ProductStore::builtin();
        let found = store.product(&ProductId::new("PIPR-MOSPAD-0000")).await.unwrap();
        assert_eq!(found.unwrap().name, "Pipr mouse pad");

        let missing = store.product(&ProductId::new("UNKNOWN")).await.unwrap();
        assert!(missing.is_none());
    }
}
