//! Product list page.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::CatalogState;

/// Products page — one card per fetched product, in fetch order.
///
/// An empty catalog (fetch pending or failed) renders an empty list.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <section class="products-page">
            <h1>"Products"</h1>
            <ul class="products-page__list">
                {move || {
                    catalog
                        .get()
                        .products
                        .into_iter()
                        .map(|p| {
                            view! {
                                <li class="products-page__item">
                                    <ProductCard id=p.id title=p.title price=p.price/>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
