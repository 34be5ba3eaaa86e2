//! Reusable card component for product list items.

use leptos::prelude::*;

use crate::util::format::format_price;

/// A clickable card linking to a product's detail page.
#[component]
pub fn ProductCard(id: u64, title: String, price: f64) -> impl IntoView {
    let href = format!("/products/{id}");

    view! {
        <a class="product-card" href=href>
            <span class="product-card__title">{title}</span>
            <span class="product-card__price">{format_price(price)}</span>
        </a>
    }
}
