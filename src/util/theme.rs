//! Theme persistence and application.
//!
//! The preference lives in `localStorage`; applying a theme sets or
//! removes the dark class on `<html>`. Both require a browser, so the
//! server build compiles these to no-ops.

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "storefront_theme";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "theme-dark";

/// Load the theme preference.
///
/// Order: stored preference, then the `prefers-color-scheme` media query,
/// then light.
pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::from_token(&token) {
                    return theme;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply a theme to the document root.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let result = match theme {
                Theme::Dark => class_list.add_1(DARK_CLASS),
                Theme::Light => class_list.remove_1(DARK_CLASS),
            };
            if result.is_err() {
                leptos::logging::warn!("failed to update theme class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the inverse theme, apply it, and persist the preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.inverse();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, next.as_token()).is_err() {
                    leptos::logging::warn!("failed to persist theme preference");
                }
            }
        }
    }
    next
}
