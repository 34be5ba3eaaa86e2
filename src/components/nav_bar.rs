//! Top navigation bar.

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};

/// Navigation bar — brand link, page links, and the theme toggle.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let toggle_label = move || match ui.get().theme {
        Theme::Light => "Dark",
        Theme::Dark => "Light",
    };

    let on_toggle = move |_| {
        ui.update(|u| u.theme = crate::util::theme::toggle(u.theme));
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Storefront"
            </a>
            <a class="nav-bar__link" href="/products">
                "Products"
            </a>
            <a class="nav-bar__link" href="/about">
                "About"
            </a>
            <span class="nav-bar__spacer"></span>
            <button class="btn nav-bar__theme" on:click=on_toggle title="Toggle theme">
                {toggle_label}
            </button>
        </nav>
    }
}
