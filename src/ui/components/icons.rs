//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility. The `class` prop replaces the default size,
//! so callers that pass classes must include a size themselves.

use leptos::prelude::*;

/// Common icon size class.
pub const ICON_SIZE: &str = "h-4 w-4";

/// Shared `<svg>` wrapper with the stroke attributes every icon uses.
#[component]
fn IconSvg(class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {children()}
        </svg>
    }
}

/// Loader/spinner icon.
#[component]
pub fn LoaderIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    let classes = format!("{class} animate-spin");

    view! {
        <IconSvg class=classes>
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </IconSvg>
    }
}

/// Open book icon, used as the site logo.
#[component]
pub fn BookOpenIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
        </IconSvg>
    }
}

/// Connected icon.
#[component]
pub fn WifiIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <path d="M5 12.55a11 11 0 0 1 14.08 0" />
            <path d="M1.42 9a16 16 0 0 1 21.16 0" />
            <path d="M8.53 16.11a6 6 0 0 1 6.95 0" />
            <line x1="12" y1="20" x2="12.01" y2="20" />
        </IconSvg>
    }
}

/// Disconnected icon.
#[component]
pub fn WifiOffIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <line x1="1" y1="1" x2="23" y2="23" />
            <path d="M16.72 11.06A10.94 10.94 0 0 1 19 12.55" />
            <path d="M5 12.55a10.94 10.94 0 0 1 5.17-2.39" />
            <path d="M10.71 5.05A16 16 0 0 1 22.58 9" />
            <path d="M1.42 9a15.91 15.91 0 0 1 4.7-2.88" />
            <path d="M8.53 16.11a6 6 0 0 1 6.95 0" />
            <line x1="12" y1="20" x2="12.01" y2="20" />
        </IconSvg>
    }
}

/// Retry icon.
#[component]
pub fn RefreshIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <polyline points="23 4 23 10 17 10" />
            <polyline points="1 20 1 14 7 14" />
            <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15" />
        </IconSvg>
    }
}

/// Back-navigation icon.
#[component]
pub fn ArrowLeftIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <line x1="19" y1="12" x2="5" y2="12" />
            <polyline points="12 19 5 12 12 5" />
        </IconSvg>
    }
}

/// Warning icon for error states.
#[component]
pub fn AlertTriangleIcon(
    /// CSS classes, including size.
    #[prop(into, default = ICON_SIZE.to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" />
            <line x1="12" y1="9" x2="12" y2="13" />
            <line x1="12" y1="17" x2="12.01" y2="17" />
        </IconSvg>
    }
}
