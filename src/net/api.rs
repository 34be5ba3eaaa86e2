//! Catalog fetch helper.
//!
//! Client-side (hydrate): one real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since the catalog is
//! only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The caller gets `Result<_, String>` instead of panics; a failed fetch
//! degrades to an empty catalog without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::Product;

/// The public demo catalog endpoint. The sole piece of configuration in
/// the crate.
pub const PRODUCTS_URL: &str = "https://dummyjson.com/products";

/// Fetch the full product catalog from [`PRODUCTS_URL`].
///
/// # Errors
///
/// Returns an error string if the request fails, the response status is
/// not 2xx, or the body does not decode as the expected envelope.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ProductsResponse;

        let resp = gloo_net::http::Request::get(PRODUCTS_URL)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("catalog request failed: {}", resp.status()));
        }
        let body: ProductsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on the server".to_owned())
    }
}
