//! Main application layout.

use leptos::prelude::*;

use super::Site;
use crate::network::BannerState;
use crate::ui::components::{BookOpenIcon, NetworkBanner};

/// Primary navigation entries: `(label, href)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Browse", "/browse"),
    ("Library", "/library"),
];

/// Header, network banner, content area and footer.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <MainLayout site=site active="/browse">
///         <BrowseLoading />
///     </MainLayout>
/// }
/// ```
#[component]
pub fn MainLayout(
    /// Site-wide values.
    site: Site,
    /// `href` of the current navigation entry.
    #[prop(default = "")]
    active: &'static str,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let Site {
        name,
        restore_banner_ms,
    } = site;
    let footer_name = name.clone();

    view! {
        <NetworkBanner state=BannerState::Hidden restore_ms=restore_banner_ms />
        <div id="app-shell" class="flex min-h-screen flex-col">
            <header class="sticky top-0 z-50 w-full bg-surfaceContainer shadow-sm backdrop-blur">
                <div class="container mx-auto flex h-14 max-w-6xl items-center justify-between px-4 md:h-16 md:px-6">
                    <a href="/" class="flex items-center gap-2 font-semibold transition-opacity hover:opacity-80">
                        <BookOpenIcon class="h-5 w-5 text-primary md:h-6 md:w-6" />
                        <span class="text-base md:text-lg">{name}</span>
                    </a>
                    <nav class="flex items-center gap-1" hx-boost="true">
                        {NAV_LINKS
                            .iter()
                            .map(|&(label, href)| {
                                let current = (href == active).then_some("page");
                                view! {
                                    <a
                                        href=href
                                        aria-current=current
                                        class="rounded-xl px-3 py-2 text-sm text-textSecondary transition-all hover:bg-surface hover:text-textPrimary"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="/login"
                            class="rounded-xl bg-primary px-3 py-2 text-sm text-white transition-all hover:bg-primaryMuted"
                        >
                            "Sign in"
                        </a>
                    </nav>
                </div>
            </header>

            <main id="app" class="container mx-auto max-w-6xl flex-1 px-4 py-4 md:px-6 md:py-8">
                {children()}
            </main>

            <footer class="hidden bg-surfaceContainer py-3 md:block md:py-6">
                <div class="container mx-auto max-w-6xl px-4 md:px-6">
                    <p class="text-center text-xs text-textMuted">{footer_name}</p>
                </div>
            </footer>
        </div>
    }
}
