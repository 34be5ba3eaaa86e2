//! Wildcard fallback page for unknown routes.

use leptos::prelude::*;

/// Fallback page — rendered by the router for any unmatched path.
#[component]
pub fn FallbackPage() -> impl IntoView {
    view! {
        <section class="fallback-page">
            <h1>"Page not found"</h1>
            <p>"There is nothing at this address."</p>
            <a href="/">"Go home"</a>
        </section>
    }
}
