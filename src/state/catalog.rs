#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

/// Shared catalog state, filled by the one fetch issued on application
/// load. `error` keeps the failure reason for state inspection; no view
/// renders it.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub error: Option<String>,
    pub loading: bool,
}

impl CatalogState {
    /// Look up a product by id. The catalog is one short fetched batch,
    /// so a linear scan is all that is warranted.
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Parse the `:id` route parameter. Surrounding whitespace is tolerated;
/// anything that is not a decimal integer yields `None`.
pub fn parse_product_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
