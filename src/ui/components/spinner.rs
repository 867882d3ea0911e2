//! Loading spinners.

use leptos::prelude::*;

use super::icons::LoaderIcon;
use super::style::{StyleKey, join_classes, style_table};

/// Spinner size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Inline with text.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Page-level.
    Lg,
}

style_table!(SpinnerSize, "spinner size", {
    Sm => ("sm", "h-4 w-4"),
    Md => ("md", "h-6 w-6"),
    Lg => ("lg", "h-10 w-10"),
});

/// Animated spinner.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Spinner size=SpinnerSize::Lg /> }
/// ```
#[component]
pub fn Spinner(
    /// Spinner size.
    #[prop(into, default = StyleKey::Known(SpinnerSize::Md))]
    size: StyleKey<SpinnerSize>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = join_classes(&["text-primary", size.classes(), class]);

    view! {
        <span role="status" aria-label="Loading" class="inline-flex">
            <LoaderIcon class=classes />
        </span>
    }
}

/// Spinner followed by a short label, for inline loading states.
#[component]
pub fn LoadingSpinner(
    /// Text next to the spinner.
    #[prop(default = "Loading...")]
    label: &'static str,
    /// Spinner size.
    #[prop(into, default = StyleKey::Known(SpinnerSize::Sm))]
    size: StyleKey<SpinnerSize>,
) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 text-sm text-textMuted">
            <Spinner size=size />
            <span>{label}</span>
        </div>
    }
}

/// Spinner centered in the available page height.
#[component]
pub fn PageSpinner(
    /// Optional caption below the spinner.
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex min-h-[50vh] flex-col items-center justify-center gap-4">
            <Spinner size=SpinnerSize::Lg />
            {label.map(|label| view! { <p class="text-sm text-textMuted">{label}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::StyleTable;

    #[test]
    fn test_sizes_apply_classes() {
        for &size in SpinnerSize::ALL {
            let html = view! { <Spinner size=size /> }.to_html();
            assert!(html.contains(size.classes()), "{size:?}: {html}");
            assert!(html.contains("animate-spin"));
            assert!(html.contains("role=\"status\""));
        }
    }

    #[test]
    fn test_unknown_size_keeps_base_styling() {
        let html = view! { <Spinner size="gigantic" /> }.to_html();
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("h-6 w-6"));
    }

    #[test]
    fn test_page_spinner_label_is_optional() {
        let bare = view! { <PageSpinner /> }.to_html();
        assert!(!bare.contains("<p"));

        let labelled = view! { <PageSpinner label="Opening chapter" /> }.to_html();
        assert!(labelled.contains("Opening chapter"));
        assert!(labelled.contains("h-10 w-10"));
    }

    #[test]
    fn test_loading_spinner_label() {
        let html = view! { <LoadingSpinner /> }.to_html();
        assert!(html.contains("Loading..."));
        assert!(html.contains("h-4 w-4"));
    }
}
