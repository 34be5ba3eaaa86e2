//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    about::AboutPage, fallback::FallbackPage, home::HomePage, product::ProductPage,
    products::ProductsPage,
};
use crate::state::{catalog::CatalogState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared catalog and UI state contexts, issues the one
/// catalog fetch of the session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(catalog);
    provide_context(ui);

    // Browser only: restore the theme preference and load the catalog.
    // The server render ships an empty catalog; hydration fills it in.
    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::theme::load();
        crate::util::theme::apply(theme);
        ui.set(UiState { theme });

        catalog.update(|c| c.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(products) => {
                    catalog.update(|c| {
                        c.products = products;
                        c.loading = false;
                    });
                }
                Err(err) => {
                    // Stored for state inspection, never rendered.
                    leptos::logging::warn!("catalog fetch failed: {err}");
                    catalog.update(|c| {
                        c.error = Some(err);
                        c.loading = false;
                    });
                }
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <NavBar/>
            <main class="app__content">
                <Routes fallback=|| view! { <FallbackPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}
