//! Error views.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::ui::components::{
    AlertTriangleIcon, ArrowLeftIcon, ButtonSize, ButtonVariant, LinkButton, RefreshIcon,
    button_classes,
};

/// Opaque content-load failure handed to an error view.
///
/// Views display a generic message; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoadError {}

/// Zero-argument retry callback registered by the host.
///
/// The retry button posts to the chapter's retry route, which runs this
/// callback once per request before rendering the chapter again.
#[derive(Clone)]
pub struct RetryAction(Arc<dyn Fn() + Send + Sync>);

impl RetryAction {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// Run the callback once.
    pub fn trigger(&self) {
        (self.0)();
    }
}

impl fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RetryAction")
    }
}

/// Link target for leaving a failed chapter.
#[must_use]
pub fn comic_href(slug: &str) -> String {
    format!("/comics/{slug}")
}

/// Link target for a chapter.
#[must_use]
pub fn chapter_href(slug: &str, chapter: &str) -> String {
    format!("/comics/{slug}/chapters/{chapter}")
}

/// Endpoint the retry button posts to.
#[must_use]
pub fn chapter_retry_href(slug: &str, chapter: &str) -> String {
    format!("{}/retry", chapter_href(slug, chapter))
}

/// Recoverable failure screen for a chapter that did not load.
///
/// Offers a single manual retry and a way back to the comic's page. The
/// retry button posts to [`chapter_retry_href`] and swaps the returned
/// page's `#app` in place of the current one.
#[component]
pub fn ChapterError(
    /// The failure; not inspected.
    error: LoadError,
    /// Comic slug from the route.
    #[prop(into)]
    slug: String,
    /// Chapter from the route.
    #[prop(into)]
    chapter: String,
) -> impl IntoView {
    tracing::warn!(%error, %slug, %chapter, "Chapter failed to load");

    let retry_url = chapter_retry_href(&slug, &chapter);
    let retry_classes = button_classes(ButtonVariant::Primary, ButtonSize::Md, "");

    view! {
        <div
            class="flex flex-col items-center justify-center gap-6 py-20 text-center"
            role="alert"
            data-error="chapter"
        >
            <AlertTriangleIcon class="h-12 w-12 text-danger" />
            <div class="space-y-2">
                <h1 class="text-2xl font-bold">"Failed to load chapter"</h1>
                <p class="text-textMuted">
                    "Something went wrong while loading this chapter. Please try again."
                </p>
            </div>
            <div class="flex flex-wrap items-center justify-center gap-3">
                <button
                    type="button"
                    class=retry_classes
                    data-action="retry"
                    hx-post=retry_url
                    hx-target="#app"
                    hx-select="#app"
                    hx-swap="outerHTML"
                >
                    <RefreshIcon />
                    "Try again"
                </button>
                <LinkButton href=comic_href(&slug) variant=ButtonVariant::Outline>
                    <ArrowLeftIcon />
                    "Back to comic"
                </LinkButton>
            </div>
        </div>
    }
}

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <h1 class="mb-4 text-4xl font-bold">"404"</h1>
            <p class="mb-6 text-textMuted">"Page not found"</p>
            <LinkButton href="/">"Go Home"</LinkButton>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_retry_runs_callback_once_per_trigger() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let retry = RetryAction::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        retry.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        retry.clone().trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_escape_link_points_to_comic() {
        let html = view! {
            <ChapterError error=LoadError::new("boom") slug="one-piece" chapter="1044" />
        }
        .to_html();

        assert!(html.contains("href=\"/comics/one-piece\""));
        assert!(html.contains("data-action=\"retry\""));
        assert!(!html.contains("boom"));
    }

    #[test]
    fn test_retry_button_posts_to_retry_route() {
        let html = view! {
            <ChapterError error=LoadError::new("boom") slug="berserk" chapter="12.5" />
        }
        .to_html();

        assert!(html.contains("hx-post=\"/comics/berserk/chapters/12.5/retry\""));
        assert!(html.contains("hx-target=\"#app\""));
        assert!(html.contains("hx-select=\"#app\""));
    }

    #[test]
    fn test_not_found_links_home() {
        let html = view! { <NotFound /> }.to_html();
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/\""));
    }
}
