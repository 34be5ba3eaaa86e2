//! Landing page.

use leptos::prelude::*;

/// Home page — a short pitch and a pointer into the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Storefront"</h1>
            <p>"Browse the demo product catalog."</p>
            <a class="btn btn--primary" href="/products">
                "View products"
            </a>
        </section>
    }
}
