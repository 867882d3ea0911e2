//! Button styles and the link-styled button.

use leptos::prelude::*;

use super::style::{StyleTable, join_classes, style_table};

/// Classes every button carries.
const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-xl \
                                   font-medium transition-all active:scale-95 \
                                   focus-visible:outline-none focus-visible:ring-2 \
                                   focus-visible:ring-primary focus-visible:ring-offset-2 \
                                   disabled:pointer-events-none disabled:opacity-50";

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Subtle ghost button.
    Ghost,
    /// Outline button.
    Outline,
}

style_table!(ButtonVariant, "button", {
    Primary => ("primary", "bg-primary text-white hover:bg-primaryMuted shadow-md"),
    Ghost => ("ghost", "bg-transparent text-textPrimary hover:bg-surface"),
    Outline => ("outline", "bg-transparent border border-panelBorder text-textPrimary hover:bg-surface"),
});

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
}

style_table!(ButtonSize, "button size", {
    Sm => ("sm", "h-8 px-3 text-xs"),
    Md => ("md", "h-10 px-4 text-sm"),
});

/// Full class list for a button-like element.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    join_classes(&[BUTTON_BASE_CLASSES, variant.classes(), size.classes(), extra])
}

/// Anchor styled as a button, for navigation actions.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <LinkButton href="/browse" variant=ButtonVariant::Ghost>
///         "Browse comics"
///     </LinkButton>
/// }
/// ```
#[component]
pub fn LinkButton(
    /// Link target.
    #[prop(into)]
    href: String,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);

    view! {
        <a href=href class=classes>
            {children()}
        </a>
    }
}
