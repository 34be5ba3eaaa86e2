//! Product detail page.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Product;
use crate::state::catalog::{CatalogState, parse_product_id};
use crate::util::format::{format_price, format_rating};

/// Outcome of resolving the `:id` route parameter against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// The catalog fetch is still in flight.
    Pending,
    /// The id matched a fetched product.
    Found(Product),
    /// Unknown or unparseable id against a settled catalog.
    Missing,
}

/// Resolve a raw route parameter to a catalog product.
///
/// A miss is only reported once the catalog has settled, so a direct
/// navigation to a detail URL does not flash the not-found view while
/// the fetch is pending.
pub fn resolve(state: &CatalogState, raw_id: &str) -> Lookup {
    if state.loading {
        return Lookup::Pending;
    }
    parse_product_id(raw_id)
        .and_then(|id| state.find(id))
        .map_or(Lookup::Missing, |p| Lookup::Found(p.clone()))
}

/// Product page — reads `:id` from the route and renders the matching
/// product, or a not-found message with a link back home.
#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let params = use_params_map();

    let lookup = move || {
        let raw = params.read().get("id").unwrap_or_default();
        resolve(&catalog.get(), &raw)
    };

    view! {
        {move || match lookup() {
            Lookup::Pending => ().into_any(),
            Lookup::Found(product) => {
                view! {
                    <article class="product-page">
                        <h1>{product.title.clone()}</h1>
                        <p class="product-page__description">{product.description.clone()}</p>
                        <p class="product-page__price">{format_price(product.price)}</p>
                        <p class="product-page__rating">
                            {format!("Rating: {}", format_rating(product.rating))}
                        </p>
                        {product
                            .images
                            .first()
                            .map(|src| {
                                view! {
                                    <img
                                        class="product-page__image"
                                        src=src.clone()
                                        alt=product.title.clone()
                                    />
                                }
                            })}
                    </article>
                }
                    .into_any()
            }
            Lookup::Missing => {
                view! {
                    <div class="product-page product-page--missing">
                        <p>"Product not found."</p>
                        <a href="/">"Go home"</a>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
