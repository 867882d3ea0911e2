//! Badge component for comic status tags and labels.

use leptos::prelude::*;

use super::style::{StyleKey, join_classes, style_table};

/// Classes every badge carries regardless of variant and size.
pub const BADGE_BASE_CLASSES: &str =
    "inline-flex items-center rounded-full font-semibold transition-colors";

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Brand-coloured badge.
    Primary,
    /// Muted badge.
    Secondary,
    /// Success/positive badge (e.g. "Completed").
    Success,
    /// Warning badge (e.g. "Hiatus").
    Warning,
    /// Error/destructive badge (e.g. "Dropped").
    Danger,
    /// Informational badge (e.g. "New chapter").
    Info,
    /// Outline badge.
    Outline,
    /// Borderless, transparent badge.
    Ghost,
}

style_table!(BadgeVariant, "badge", {
    Default => ("default", "bg-panel text-textPrimary"),
    Primary => ("primary", "bg-primary text-white"),
    Secondary => ("secondary", "bg-surfaceVariant text-textSecondary border border-panelBorder"),
    Success => ("success", "bg-success text-white"),
    Warning => ("warning", "bg-warning text-black"),
    Danger => ("danger", "bg-danger text-white"),
    Info => ("info", "bg-info text-white"),
    Outline => ("outline", "border border-panelBorder bg-transparent text-textPrimary"),
    Ghost => ("ghost", "bg-transparent text-textMuted"),
});

/// Badge size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    /// Compact badge.
    Sm,
    /// Default badge.
    #[default]
    Md,
    /// Large badge.
    Lg,
}

style_table!(BadgeSize, "badge size", {
    Sm => ("sm", "px-2 py-0.5 text-[10px]"),
    Md => ("md", "px-2.5 py-0.5 text-xs"),
    Lg => ("lg", "px-3 py-1 text-sm"),
});

/// Full class list for a badge.
#[must_use]
pub fn badge_classes(
    variant: &StyleKey<BadgeVariant>,
    size: &StyleKey<BadgeSize>,
    extra: &str,
) -> String {
    join_classes(&[BADGE_BASE_CLASSES, variant.classes(), size.classes(), extra])
}

/// Badge component for displaying status or labels.
///
/// Variants may be given typed or by name; an unknown name renders with
/// the base classes only.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Completed"</Badge>
///     <Badge variant="warning" size=BadgeSize::Sm>"Hiatus"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(into, default = StyleKey::Known(BadgeVariant::Default))]
    variant: StyleKey<BadgeVariant>,
    /// Badge size.
    #[prop(into, default = StyleKey::Known(BadgeSize::Md))]
    size: StyleKey<BadgeSize>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = badge_classes(&variant, &size, class);
    let variant_name = variant.known().map(BadgeVariant::name);

    view! {
        <span class=classes data-variant=variant_name>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::StyleTable;

    fn render(variant: StyleKey<BadgeVariant>, size: StyleKey<BadgeSize>) -> String {
        view! { <Badge variant=variant size=size>"Ongoing"</Badge> }.to_html()
    }

    #[test]
    fn test_every_variant_and_size_renders_exact_classes() {
        for &variant in BadgeVariant::ALL {
            for &size in BadgeSize::ALL {
                let html = render(variant.into(), size.into());
                let expected = join_classes(&[
                    BADGE_BASE_CLASSES,
                    variant.classes(),
                    size.classes(),
                ]);
                assert!(
                    html.contains(&format!("class=\"{expected}\"")),
                    "{variant:?}/{size:?} rendered {html}"
                );
                assert!(html.contains("Ongoing"));
            }
        }
    }

    #[test]
    fn test_variant_names_parse() {
        assert_eq!("danger".parse::<BadgeVariant>(), Ok(BadgeVariant::Danger));
        assert_eq!(" Info ".parse::<BadgeVariant>(), Ok(BadgeVariant::Info));
        assert_eq!("lg".parse::<BadgeSize>(), Ok(BadgeSize::Lg));
        assert_eq!(BadgeVariant::ALL.len(), 9);
        assert_eq!(BadgeSize::ALL.len(), 3);
    }

    #[test]
    fn test_unknown_variant_renders_base_only() {
        let html = render("sparkly".into(), "huge".into());
        assert!(html.contains(&format!("class=\"{BADGE_BASE_CLASSES}\"")));
        assert!(!html.contains("data-variant"));
    }

    #[test]
    fn test_named_variant_matches_typed() {
        let typed = render(BadgeVariant::Warning.into(), BadgeSize::Sm.into());
        let named = render("warning".into(), "sm".into());
        assert_eq!(typed, named);
    }
}
