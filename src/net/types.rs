#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A catalog item as returned by the product API.
///
/// The remote records carry more fields (category, stock, thumbnail, ...);
/// serde ignores what is not modeled here. Products are never mutated
/// after deserialization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Envelope returned by the catalog endpoint: a JSON object wrapping the
/// `products` array.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}
