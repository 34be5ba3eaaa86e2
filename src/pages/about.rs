//! About page.

use leptos::prelude::*;

/// About page — static copy describing the application.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>
                "Storefront is a small catalog browser. Product data comes "
                "from a public demo API and lives only in memory; reloading "
                "the page fetches it again."
            </p>
        </section>
    }
}
